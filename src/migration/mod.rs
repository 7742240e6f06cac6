//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_crops;
mod m20250601_000002_create_farmers;
mod m20250601_000003_create_fields;
mod m20250601_000004_create_field_crops;
mod m20250601_000005_create_conversations;
mod m20250601_000006_create_weather_data;
mod m20250601_000007_create_recommendations;
mod m20250601_000008_create_farm_tasks;
mod m20250601_000009_create_llm_operation_logs;
mod m20250601_000010_create_system_health_logs;
pub mod m20250601_000011_seed_crops;
mod m20250601_000012_create_views;
mod m20250601_000013_crops_name_ignore_case;

pub use m20250601_000011_seed_crops::SEED_CROPS;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_crops::Migration),
            Box::new(m20250601_000002_create_farmers::Migration),
            Box::new(m20250601_000003_create_fields::Migration),
            Box::new(m20250601_000004_create_field_crops::Migration),
            Box::new(m20250601_000005_create_conversations::Migration),
            Box::new(m20250601_000006_create_weather_data::Migration),
            Box::new(m20250601_000007_create_recommendations::Migration),
            Box::new(m20250601_000008_create_farm_tasks::Migration),
            Box::new(m20250601_000009_create_llm_operation_logs::Migration),
            Box::new(m20250601_000010_create_system_health_logs::Migration),
            Box::new(m20250601_000011_seed_crops::Migration),
            Box::new(m20250601_000012_create_views::Migration),
            Box::new(m20250601_000013_crops_name_ignore_case::Migration),
        ]
    }
}
