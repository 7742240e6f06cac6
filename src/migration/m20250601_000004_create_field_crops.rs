//! Migration: Create field_crops table.
//!
//! One planting per row. `crop_name` is free text and deliberately not a
//! foreign key into `crops`.

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
                CREATE TABLE field_crops (
                    id SERIAL PRIMARY KEY,
                    field_id INTEGER NOT NULL REFERENCES fields(field_id) ON DELETE CASCADE,
                    crop_name VARCHAR(100) NOT NULL,
                    variety VARCHAR(100),
                    planting_date DATE,
                    -- Expected and actual dates are recorded independently
                    expected_harvest_date DATE,
                    actual_harvest_date DATE,
                    status VARCHAR(20) NOT NULL DEFAULT 'active'
                        CHECK (status IN ('active', 'harvested', 'failed')),
                    yield_tons DOUBLE PRECISION,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_field_crops_field_id ON field_crops(field_id);

                CREATE INDEX idx_field_crops_status ON field_crops(status);

                -- Trigger to update updated_at
                CREATE TRIGGER update_field_crops_updated_at
                    BEFORE UPDATE ON field_crops
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_field_crops_updated_at ON field_crops;
                DROP TABLE IF EXISTS field_crops CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
