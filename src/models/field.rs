//! Field ledger inputs and the per-farmer field overview row.

use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Fields accepted when recording a land parcel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewField {
    pub farmer_id: i32,
    pub field_name: String,
    /// Hectares.
    pub field_size: Option<f64>,
    pub field_location: Option<String>,
    pub soil_type: Option<String>,
}

/// Field-by-field update. `None` leaves the stored value untouched,
/// `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub field_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_size: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_location: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub soil_type: Option<Option<String>>,
}

/// A farmer's field with its current active planting, if any.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct FieldOverview {
    pub field_id: i32,
    pub field_name: String,
    pub field_size: Option<f64>,
    pub field_location: Option<String>,
    pub soil_type: Option<String>,
    pub current_crop: Option<String>,
    pub variety: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub crop_status: Option<String>,
}
