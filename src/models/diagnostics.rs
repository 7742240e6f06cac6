//! Diagnostics store inputs: LLM operation log and component health samples.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// Health of one component at sampling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "healthy" => Some(Self::Healthy),
            "degraded" => Some(Self::Degraded),
            "unhealthy" => Some(Self::Unhealthy),
            _ => None,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::CheckConstraintViolation(format!(
                "health status '{}' is not one of healthy, degraded, unhealthy",
                s
            ))
        })
    }
}

/// One AI-assisted operation, recorded by instrumentation.
///
/// Defaults to a successful operation, like the column default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLlmOperation {
    pub farmer_id: Option<i32>,
    pub operation_type: String,
    pub input_text: Option<String>,
    pub output_text: Option<String>,
    pub model_used: Option<String>,
    pub tokens_used: Option<i32>,
    pub latency_ms: Option<i32>,
    pub success: bool,
    pub error_message: Option<String>,
}

impl Default for NewLlmOperation {
    fn default() -> Self {
        Self {
            farmer_id: None,
            operation_type: String::new(),
            input_text: None,
            output_text: None,
            model_used: None,
            tokens_used: None,
            latency_ms: None,
            success: true,
            error_message: None,
        }
    }
}

impl NewLlmOperation {
    /// A failed operation carrying its error text.
    pub fn failed(operation_type: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation_type: operation_type.into(),
            success: false,
            error_message: Some(error.into()),
            ..Default::default()
        }
    }
}

/// One component health sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHealthCheck {
    pub component: String,
    pub status: HealthStatus,
    pub response_time_ms: Option<i32>,
    pub error_message: Option<String>,
    pub metadata: Option<JsonValue>,
}

impl NewHealthCheck {
    pub fn new(component: impl Into<String>, status: HealthStatus) -> Self {
        Self {
            component: component.into(),
            status,
            response_time_ms: None,
            error_message: None,
            metadata: None,
        }
    }

    pub fn with_response_time(mut self, response_time_ms: i32) -> Self {
        self.response_time_ms = Some(response_time_ms);
        self
    }
}
