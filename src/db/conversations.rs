//! Database queries for the conversation log.
//!
//! Exchanges are append-only: there is no update or delete here. They leave the
//! log only when their farmer is deleted.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbBackend, EntityTrait, FromQueryResult, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set, Statement,
};
use tracing::debug;

use crate::entity::conversation::{self, ActiveModel, Entity as Conversation};
use crate::error::{AppError, AppResult};
use crate::models::conversation::DEFAULT_LANGUAGE;
use crate::models::{
    ConversationDetail, ConversationReviewItem, NewConversation, clamp_limit, require_text,
};

use super::DbPool;

impl DbPool {
    /// Append a question/answer exchange.
    ///
    /// `farmer_id` may be absent for unidentified senders.
    pub async fn create_conversation(
        &self,
        new: NewConversation,
    ) -> AppResult<conversation::Model> {
        require_text("question", &new.question)?;
        require_text("answer", &new.answer)?;

        let language = new
            .language
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let model = ActiveModel {
            id: NotSet,
            farmer_id: Set(new.farmer_id),
            question: Set(new.question),
            answer: Set(new.answer),
            language: Set(language),
            topic: Set(new.topic),
            confidence_score: Set(new.confidence_score),
            wa_phone_number: Set(new.wa_phone_number),
            created_at: Set(Utc::now()),
        };

        let result = model.insert(self.connection()).await?;

        debug!(conversation_id = result.id, farmer_id = ?result.farmer_id, "Logged conversation");
        Ok(result)
    }

    /// Get an exchange by ID.
    pub async fn get_conversation(&self, id: i32) -> AppResult<conversation::Model> {
        Conversation::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Conversation {}", id)))
    }

    /// A farmer's exchanges, newest first.
    pub async fn get_recent_conversations(
        &self,
        farmer_id: i32,
        limit: Option<u64>,
    ) -> AppResult<Vec<conversation::Model>> {
        let result = Conversation::find()
            .filter(conversation::Column::FarmerId.eq(farmer_id))
            .order_by_desc(conversation::Column::CreatedAt)
            .order_by_desc(conversation::Column::Id)
            .limit(clamp_limit(limit))
            .all(self.connection())
            .await?;

        Ok(result)
    }

    /// The latest exchange of every known farmer, most recent first.
    pub async fn list_conversations_for_review(
        &self,
        limit: Option<u64>,
    ) -> AppResult<Vec<ConversationReviewItem>> {
        let sql = r#"
            SELECT * FROM (
                SELECT DISTINCT ON (c.farmer_id)
                    c.id,
                    c.farmer_id,
                    c.question,
                    c.created_at,
                    f.manager_name,
                    f.manager_last_name,
                    f.phone,
                    f.city,
                    f.farm_name
                FROM conversations c
                INNER JOIN farmers f ON f.id = c.farmer_id
                ORDER BY c.farmer_id, c.created_at DESC, c.id DESC
            ) latest
            ORDER BY latest.created_at DESC, latest.id DESC
            LIMIT $1
        "#;

        let limit = clamp_limit(limit) as i64;
        let result = ConversationReviewItem::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [sea_orm::Value::from(limit)],
        ))
        .all(self.connection())
        .await?;

        Ok(result)
    }

    /// One exchange with the owning farmer's name.
    pub async fn get_conversation_detail(&self, id: i32) -> AppResult<ConversationDetail> {
        let sql = r#"
            SELECT
                c.id,
                c.farmer_id,
                c.question,
                c.answer,
                c.language,
                c.topic,
                c.confidence_score,
                c.created_at,
                f.manager_name,
                f.manager_last_name
            FROM conversations c
            LEFT JOIN farmers f ON f.id = c.farmer_id
            WHERE c.id = $1
        "#;

        ConversationDetail::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [sea_orm::Value::from(id)],
        ))
        .one(self.connection())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Conversation {}", id)))
    }
}
