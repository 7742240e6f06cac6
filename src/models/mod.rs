//! Domain models for the farm records store.
//!
//! Input types for writes, status enumerations, and the row shapes returned by
//! joined reads and derived views.

pub mod conversation;
pub mod crop;
pub mod diagnostics;
pub mod farmer;
pub mod field;
pub mod field_crop;
pub mod recommendation;
pub mod task;
pub mod views;
pub mod weather;

pub use conversation::{ConversationDetail, ConversationReviewItem, NewConversation};
pub use crop::NewCrop;
pub use diagnostics::{HealthStatus, NewHealthCheck, NewLlmOperation};
pub use farmer::{FarmerUpdate, NewFarmer};
pub use field::{FieldOverview, FieldUpdate, NewField};
pub use field_crop::{CropStatus, FieldCropUpdate, NewFieldCrop};
pub use recommendation::{NewRecommendation, RecommendationPriority, RecommendationStatus};
pub use task::{NewTask, TaskFilter, TaskStatus};
pub use views::{ActiveCrop, FarmerSummary, SystemStatus};
pub use weather::NewWeatherObservation;

use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};

/// Default number of rows returned by listings.
pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// Upper bound on rows returned by listings.
pub const MAX_LIST_LIMIT: u64 = 500;

/// Clamp a caller-supplied limit to `1..=MAX_LIST_LIMIT`.
pub fn clamp_limit(limit: Option<u64>) -> u64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

/// Reject empty or whitespace-only required text.
pub fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Deserialize a nullable update column: absent is `None`, `null` is
/// `Some(None)` (clear the column), a value is `Some(Some(v))`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
