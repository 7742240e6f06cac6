//! Migration: Create conversations table.
//!
//! Question/answer history. Rows are never updated, so there is no trigger.

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
                CREATE TABLE conversations (
                    id SERIAL PRIMARY KEY,
                    farmer_id INTEGER REFERENCES farmers(id) ON DELETE CASCADE,
                    question TEXT NOT NULL,
                    answer TEXT NOT NULL,
                    language VARCHAR(10) NOT NULL DEFAULT 'hr',
                    topic VARCHAR(100),
                    confidence_score DOUBLE PRECISION,
                    -- Channel the exchange arrived on, if any
                    wa_phone_number VARCHAR(50),

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_conversations_farmer_id ON conversations(farmer_id);

                CREATE INDEX idx_conversations_created_at ON conversations(created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS conversations CASCADE;")
            .await?;

        Ok(())
    }
}
