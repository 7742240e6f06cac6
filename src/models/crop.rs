//! Crop catalog maintenance input.

use serde::{Deserialize, Serialize};

/// A catalog entry, inserted or refreshed by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCrop {
    pub crop_name: String,
    pub crop_type: Option<String>,
    pub growing_period_days: Option<i32>,
    pub croatian_name: Option<String>,
}
