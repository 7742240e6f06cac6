//! Migration: Create derived read views.
//!
//! Plain (non-materialized) views, so every read reflects committed state.

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
                -- One row per farmer, each child table counted on its own
                CREATE VIEW farmer_summary AS
                SELECT
                    f.id AS farmer_id,
                    f.farm_name,
                    f.manager_name,
                    f.manager_last_name,
                    f.city,
                    f.total_hectares,
                    (SELECT COUNT(*) FROM fields fl WHERE fl.farmer_id = f.id) AS field_count,
                    (SELECT COUNT(*) FROM conversations c WHERE c.farmer_id = f.id) AS conversation_count,
                    (SELECT COUNT(*) FROM farm_tasks t WHERE t.farmer_id = f.id) AS task_count
                FROM farmers f;

                -- Active plantings; catalog columns are NULL when the name is unknown
                CREATE VIEW active_crops AS
                SELECT
                    fc.id AS field_crop_id,
                    fa.id AS farmer_id,
                    fa.farm_name,
                    fl.field_id,
                    fl.field_name,
                    fl.field_size,
                    fc.crop_name,
                    fc.variety,
                    fc.planting_date,
                    fc.expected_harvest_date,
                    c.id AS catalog_crop_id,
                    c.crop_type,
                    c.growing_period_days,
                    c.croatian_name
                FROM field_crops fc
                JOIN fields fl ON fl.field_id = fc.field_id
                JOIN farmers fa ON fa.id = fl.farmer_id
                LEFT JOIN crops c ON c.crop_name = fc.crop_name
                WHERE fc.status = 'active';

                -- Health samples of the last 24 hours per (component, status)
                CREATE VIEW system_status AS
                SELECT
                    component,
                    status,
                    AVG(response_time_ms)::DOUBLE PRECISION AS avg_response_time_ms,
                    COUNT(*) AS check_count,
                    MAX(created_at) AS last_check
                FROM system_health_logs
                WHERE created_at > NOW() - INTERVAL '24 hours'
                GROUP BY component, status;
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
                DROP VIEW IF EXISTS system_status;
                DROP VIEW IF EXISTS active_crops;
                DROP VIEW IF EXISTS farmer_summary;
                "#,
            )
            .await?;

        Ok(())
    }
}
