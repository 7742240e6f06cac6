//! Reads over the derived views: `farmer_summary`, `active_crops`, `system_status`.
//!
//! The views are computed at query time and always reflect current base rows.

use sea_orm::{DbBackend, FromQueryResult, Statement};

use crate::error::{AppError, AppResult};
use crate::models::{ActiveCrop, FarmerSummary, SystemStatus};

use super::DbPool;

const FARMER_SUMMARY_COLUMNS: &str = r#"
    SELECT farmer_id, farm_name, manager_name, manager_last_name, city, total_hectares,
           field_count, conversation_count, task_count
    FROM farmer_summary
"#;

const ACTIVE_CROP_COLUMNS: &str = r#"
    SELECT field_crop_id, farmer_id, farm_name, field_id, field_name, field_size,
           crop_name, variety, planting_date, expected_harvest_date,
           catalog_crop_id, crop_type, growing_period_days, croatian_name
    FROM active_crops
"#;

impl DbPool {
    /// Summary row for one farmer.
    pub async fn farmer_summary(&self, farmer_id: i32) -> AppResult<FarmerSummary> {
        let sql = format!("{} WHERE farmer_id = $1", FARMER_SUMMARY_COLUMNS);

        FarmerSummary::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [sea_orm::Value::from(farmer_id)],
        ))
        .one(self.connection())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Farmer {}", farmer_id)))
    }

    /// Summary rows for every farmer, including those with nothing recorded.
    pub async fn list_farmer_summaries(&self) -> AppResult<Vec<FarmerSummary>> {
        let sql = format!("{} ORDER BY farm_name, farmer_id", FARMER_SUMMARY_COLUMNS);

        let result = FarmerSummary::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            sql,
        ))
        .all(self.connection())
        .await?;

        Ok(result)
    }

    /// Active plantings, across all farmers or for one farmer.
    pub async fn active_crops(&self, farmer_id: Option<i32>) -> AppResult<Vec<ActiveCrop>> {
        let stmt = match farmer_id {
            Some(id) => Statement::from_sql_and_values(
                DbBackend::Postgres,
                format!(
                    "{} WHERE farmer_id = $1 ORDER BY field_name, field_crop_id",
                    ACTIVE_CROP_COLUMNS
                ),
                [sea_orm::Value::from(id)],
            ),
            None => Statement::from_string(
                DbBackend::Postgres,
                format!(
                    "{} ORDER BY farmer_id, field_name, field_crop_id",
                    ACTIVE_CROP_COLUMNS
                ),
            ),
        };

        let result = ActiveCrop::find_by_statement(stmt)
            .all(self.connection())
            .await?;

        Ok(result)
    }

    /// Last-24h health rollup grouped by component and status.
    pub async fn system_status(&self) -> AppResult<Vec<SystemStatus>> {
        let sql = r#"
            SELECT component, status, avg_response_time_ms, check_count, last_check
            FROM system_status
            ORDER BY component, status
        "#;

        let result =
            SystemStatus::find_by_statement(Statement::from_string(DbBackend::Postgres, sql))
                .all(self.connection())
                .await?;

        Ok(result)
    }
}
