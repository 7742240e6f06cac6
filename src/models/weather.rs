//! Environmental store input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One location/date climate reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWeatherObservation {
    pub location: String,
    pub observation_date: NaiveDate,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub wind_speed: Option<f64>,
}
