//! Migration: Create recommendations table.
//!
//! Advisory output. Removed with the farmer; survives field removal with the
//! field link cleared.

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
                CREATE TABLE recommendations (
                    id SERIAL PRIMARY KEY,
                    farmer_id INTEGER NOT NULL REFERENCES farmers(id) ON DELETE CASCADE,
                    field_id INTEGER REFERENCES fields(field_id) ON DELETE SET NULL,
                    recommendation_type VARCHAR(50),
                    recommendation_text TEXT NOT NULL,
                    priority VARCHAR(20) NOT NULL DEFAULT 'medium'
                        CHECK (priority IN ('low', 'medium', 'high', 'urgent')),
                    status VARCHAR(20) NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('pending', 'implemented', 'ignored')),
                    valid_until DATE,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_recommendations_farmer_id ON recommendations(farmer_id);

                CREATE INDEX idx_recommendations_field_id ON recommendations(field_id);

                -- Trigger to update updated_at
                CREATE TRIGGER update_recommendations_updated_at
                    BEFORE UPDATE ON recommendations
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
                DROP TRIGGER IF EXISTS update_recommendations_updated_at ON recommendations;
                DROP TABLE IF EXISTS recommendations CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
