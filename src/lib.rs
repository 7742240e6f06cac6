//! Farm records store library.
//!
//! Relational record keeping for an agricultural advisory service: the farmer
//! registry, fields and plantings, the crop catalog, conversation and
//! recommendation logs, the task ledger, weather observations and diagnostics,
//! plus the derived read views over them.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod migration;
pub mod models;

pub use config::Config;
pub use db::DbPool;
pub use error::{AppError, AppResult};
