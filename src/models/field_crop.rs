//! Field-crop (planting) inputs and status lifecycle.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Planting status.
///
/// Transitions are caller-driven: setting an actual harvest date does not move
/// a planting out of `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    #[default]
    Active,
    Harvested,
    Failed,
}

impl CropStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Harvested => "harvested",
            Self::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "harvested" => Some(Self::Harvested),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for CropStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CropStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::CheckConstraintViolation(format!(
                "crop status '{}' is not one of active, harvested, failed",
                s
            ))
        })
    }
}

/// Fields accepted when recording a planting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFieldCrop {
    pub field_id: i32,
    /// Free text; matched against the catalog by name at read time.
    pub crop_name: String,
    pub variety: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub status: CropStatus,
}

/// Caller-driven lifecycle update for a planting. `Some(None)` clears a
/// nullable column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldCropUpdate {
    pub status: Option<CropStatus>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub variety: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_harvest_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub actual_harvest_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub yield_tons: Option<Option<f64>>,
}
