//! Farmer registry inputs.

use serde::{Deserialize, Serialize};

/// Fields accepted when registering a farmer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFarmer {
    /// State registration number, unique when present.
    pub state_farm_number: Option<String>,
    /// Tax id, unique when present.
    pub vat_no: Option<String>,
    pub farm_name: Option<String>,
    pub manager_name: Option<String>,
    pub manager_last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub wa_phone_number: Option<String>,
    pub street_and_no: Option<String>,
    pub city: Option<String>,
    pub farmer_type: Option<String>,
    pub secondary_farmer_type: Option<String>,
    pub total_hectares: Option<f64>,
}

/// Field-by-field update. `None` leaves the stored value untouched,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmerUpdate {
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_farm_number: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub vat_no: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub farm_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub manager_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub manager_last_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub wa_phone_number: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub street_and_no: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub farmer_type: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_farmer_type: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_hectares: Option<Option<f64>>,
}

impl FarmerUpdate {
    pub fn is_empty(&self) -> bool {
        self.state_farm_number.is_none()
            && self.vat_no.is_none()
            && self.farm_name.is_none()
            && self.manager_name.is_none()
            && self.manager_last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.wa_phone_number.is_none()
            && self.street_and_no.is_none()
            && self.city.is_none()
            && self.farmer_type.is_none()
            && self.secondary_farmer_type.is_none()
            && self.total_hectares.is_none()
    }
}

/// Manager's full name, or "Unknown" when either part is missing.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    match (first, last) {
        (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
            format!("{} {}", first, last).trim().to_string()
        }
        _ => "Unknown".to_string(),
    }
}
