//! Migration: Create weather_data table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE weather_data (
                    id SERIAL PRIMARY KEY,
                    location VARCHAR(255) NOT NULL,
                    observation_date DATE NOT NULL,
                    temperature_min DOUBLE PRECISION,
                    temperature_max DOUBLE PRECISION,
                    humidity DOUBLE PRECISION,
                    rainfall DOUBLE PRECISION,
                    wind_speed DOUBLE PRECISION,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- (location, date) is the natural identity but not unique
                CREATE INDEX idx_weather_data_location_date
                    ON weather_data(location, observation_date);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS weather_data CASCADE;")
            .await?;

        Ok(())
    }
}
