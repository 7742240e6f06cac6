//! Migration: Create farmers table.
//!
//! Farmers are the root of all owned data. Registration number and tax id are
//! unique when present; NULLs never collide.

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
                CREATE TABLE farmers (
                    id SERIAL PRIMARY KEY,
                    state_farm_number VARCHAR(50) UNIQUE,
                    vat_no VARCHAR(50) UNIQUE,

                    farm_name VARCHAR(255),
                    manager_name VARCHAR(100),
                    manager_last_name VARCHAR(100),
                    email VARCHAR(255),
                    phone VARCHAR(50),
                    -- Chat channel identifier
                    wa_phone_number VARCHAR(50),
                    street_and_no VARCHAR(255),
                    city VARCHAR(100),

                    farmer_type VARCHAR(50),
                    secondary_farmer_type VARCHAR(50),
                    total_hectares DOUBLE PRECISION,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Index for inbound chat lookups
                CREATE INDEX idx_farmers_wa_phone_number ON farmers(wa_phone_number);

                -- Index for name-ordered listings
                CREATE INDEX idx_farmers_farm_name ON farmers(farm_name);

                -- Trigger to update updated_at
                CREATE TRIGGER update_farmers_updated_at
                    BEFORE UPDATE ON farmers
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
                DROP TRIGGER IF EXISTS update_farmers_updated_at ON farmers;
                DROP TABLE IF EXISTS farmers CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
