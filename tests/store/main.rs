//! Store integration test suite.
//!
//! Exercises the schema, constraints, delete rules and derived views against a
//! real PostgreSQL database. Tests return early when `DATABASE_URL` is not set
//! (start one with `docker run -e POSTGRES_PASSWORD=farm -p 5432:5432 postgres:16`).
//!
//! Run with: cargo test --test store

mod helpers;

mod test_catalog;
mod test_diagnostics;
mod test_farmers;
mod test_fields;
mod test_views;
