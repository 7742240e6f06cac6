//! Row shapes of the derived read views.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;

/// `farmer_summary`: one row per farmer, zero counts included.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct FarmerSummary {
    pub farmer_id: i32,
    pub farm_name: Option<String>,
    pub manager_name: Option<String>,
    pub manager_last_name: Option<String>,
    pub city: Option<String>,
    pub total_hectares: Option<f64>,
    pub field_count: i64,
    pub conversation_count: i64,
    pub task_count: i64,
}

/// `active_crops`: active plantings with catalog data when the name matches.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct ActiveCrop {
    pub field_crop_id: i32,
    pub farmer_id: i32,
    pub farm_name: Option<String>,
    pub field_id: i32,
    pub field_name: String,
    pub field_size: Option<f64>,
    pub crop_name: String,
    pub variety: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub catalog_crop_id: Option<i32>,
    pub crop_type: Option<String>,
    pub growing_period_days: Option<i32>,
    pub croatian_name: Option<String>,
}

impl ActiveCrop {
    /// True when the planting's name matched a catalog entry.
    pub fn in_catalog(&self) -> bool {
        self.catalog_crop_id.is_some()
    }
}

/// `system_status`: last-24h health rollup per (component, status).
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct SystemStatus {
    pub component: String,
    pub status: String,
    pub avg_response_time_ms: Option<f64>,
    pub check_count: i64,
    pub last_check: DateTime<Utc>,
}
