//! Migration: Create farm_tasks table.

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
                CREATE TABLE farm_tasks (
                    id SERIAL PRIMARY KEY,
                    farmer_id INTEGER NOT NULL REFERENCES farmers(id) ON DELETE CASCADE,
                    field_id INTEGER REFERENCES fields(field_id) ON DELETE SET NULL,
                    task_type VARCHAR(50),
                    description TEXT NOT NULL,
                    task_date DATE,
                    status VARCHAR(20) NOT NULL DEFAULT 'planned'
                        CHECK (status IN ('planned', 'in_progress', 'completed', 'cancelled')),
                    cost DOUBLE PRECISION,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_farm_tasks_farmer_id ON farm_tasks(farmer_id);

                CREATE INDEX idx_farm_tasks_field_id ON farm_tasks(field_id);

                CREATE INDEX idx_farm_tasks_task_date ON farm_tasks(task_date);

                CREATE INDEX idx_farm_tasks_task_type ON farm_tasks(task_type);

                -- Trigger to update updated_at
                CREATE TRIGGER update_farm_tasks_updated_at
                    BEFORE UPDATE ON farm_tasks
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
                DROP TRIGGER IF EXISTS update_farm_tasks_updated_at ON farm_tasks;
                DROP TABLE IF EXISTS farm_tasks CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
