//! Migration: Create llm_operation_logs table.
//!
//! Append-only audit of assistant operations. The farmer link is cleared, not
//! removed, when the farmer goes away.

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
                CREATE TABLE llm_operation_logs (
                    id UUID PRIMARY KEY, -- UUIDv7 for time-ordered sorting
                    farmer_id INTEGER REFERENCES farmers(id) ON DELETE SET NULL,
                    operation_type VARCHAR(50) NOT NULL,
                    input_text TEXT,
                    output_text TEXT,
                    model_used VARCHAR(100),
                    tokens_used INTEGER,
                    latency_ms INTEGER,
                    success BOOLEAN NOT NULL DEFAULT TRUE,
                    error_message TEXT,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_llm_operation_logs_created_at ON llm_operation_logs(created_at);

                CREATE INDEX idx_llm_operation_logs_operation_type
                    ON llm_operation_logs(operation_type);

                CREATE INDEX idx_llm_operation_logs_farmer_id ON llm_operation_logs(farmer_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS llm_operation_logs CASCADE;")
            .await?;

        Ok(())
    }
}
