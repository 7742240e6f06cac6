//! Conversation log inputs and joined read rows.
//!
//! Conversations are an audit trail: there is an insert shape but no update shape.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use super::farmer::display_name;

/// Language recorded when the caller does not supply one.
pub const DEFAULT_LANGUAGE: &str = "hr";

/// Characters of the question shown in review listings.
pub const PREVIEW_CHARS: usize = 100;

/// Fields accepted when logging a question/answer exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewConversation {
    pub farmer_id: Option<i32>,
    pub question: String,
    pub answer: String,
    /// ISO language code, defaults to `hr`.
    pub language: Option<String>,
    pub topic: Option<String>,
    pub confidence_score: Option<f64>,
    pub wa_phone_number: Option<String>,
}

/// Latest exchange of one farmer, joined with contact data for review.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct ConversationReviewItem {
    pub id: i32,
    pub farmer_id: i32,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub manager_name: Option<String>,
    pub manager_last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub farm_name: Option<String>,
}

impl ConversationReviewItem {
    pub fn farmer_name(&self) -> String {
        display_name(
            self.manager_name.as_deref(),
            self.manager_last_name.as_deref(),
        )
    }

    /// Question shortened to `PREVIEW_CHARS` characters.
    pub fn question_preview(&self) -> String {
        preview(&self.question, PREVIEW_CHARS)
    }
}

/// One exchange with the owning farmer's name, if the farmer is known.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct ConversationDetail {
    pub id: i32,
    pub farmer_id: Option<i32>,
    pub question: String,
    pub answer: String,
    pub language: String,
    pub topic: Option<String>,
    pub confidence_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub manager_name: Option<String>,
    pub manager_last_name: Option<String>,
}

impl ConversationDetail {
    pub fn farmer_name(&self) -> String {
        display_name(
            self.manager_name.as_deref(),
            self.manager_last_name.as_deref(),
        )
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
