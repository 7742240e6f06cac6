//! SeaORM entity definitions for PostgreSQL database.

pub mod conversation;
pub mod crop;
pub mod farm_task;
pub mod farmer;
pub mod field;
pub mod field_crop;
pub mod llm_operation_log;
pub mod recommendation;
pub mod system_health_log;
pub mod weather_observation;
