//! Recommendation log inputs, priorities and statuses.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl RecommendationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::CheckConstraintViolation(format!(
                "priority '{}' is not one of low, medium, high, urgent",
                s
            ))
        })
    }
}

/// Whether the farmer acted on a recommendation.
///
/// Any value may replace any other; no ordering is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    #[default]
    Pending,
    Implemented,
    Ignored,
}

impl RecommendationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Implemented => "implemented",
            Self::Ignored => "ignored",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "implemented" => Some(Self::Implemented),
            "ignored" => Some(Self::Ignored),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::CheckConstraintViolation(format!(
                "recommendation status '{}' is not one of pending, implemented, ignored",
                s
            ))
        })
    }
}

/// Fields accepted when the advisory process records output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRecommendation {
    pub farmer_id: i32,
    pub field_id: Option<i32>,
    pub recommendation_type: Option<String>,
    pub recommendation_text: String,
    pub priority: RecommendationPriority,
    pub valid_until: Option<NaiveDate>,
}
