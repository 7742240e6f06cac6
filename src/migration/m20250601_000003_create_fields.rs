//! Migration: Create fields table.
//!
//! Land parcels, removed together with their owning farmer.

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
                CREATE TABLE fields (
                    field_id SERIAL PRIMARY KEY,
                    farmer_id INTEGER NOT NULL REFERENCES farmers(id) ON DELETE CASCADE,
                    field_name VARCHAR(255) NOT NULL,
                    -- Hectares
                    field_size DOUBLE PRECISION,
                    field_location TEXT,
                    soil_type VARCHAR(100),

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_fields_farmer_id ON fields(farmer_id);

                -- Trigger to update updated_at
                CREATE TRIGGER update_fields_updated_at
                    BEFORE UPDATE ON fields
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
                DROP TRIGGER IF EXISTS update_fields_updated_at ON fields;
                DROP TABLE IF EXISTS fields CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
