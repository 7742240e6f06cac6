//! Migration: Create system_health_logs table.

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
                CREATE TABLE system_health_logs (
                    id UUID PRIMARY KEY, -- UUIDv7 for time-ordered sorting
                    component VARCHAR(100) NOT NULL,
                    status VARCHAR(20) NOT NULL
                        CHECK (status IN ('healthy', 'degraded', 'unhealthy')),
                    response_time_ms INTEGER,
                    error_message TEXT,
                    -- Free-form probe details
                    metadata JSONB,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_system_health_logs_created_at ON system_health_logs(created_at);

                CREATE INDEX idx_system_health_logs_component ON system_health_logs(component);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS system_health_logs CASCADE;")
            .await?;

        Ok(())
    }
}
