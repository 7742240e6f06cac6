//! Database queries for the recommendation log.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entity::recommendation::{self, ActiveModel, Entity as Recommendation};
use crate::error::{AppError, AppResult};
use crate::models::{NewRecommendation, RecommendationStatus, require_text};

use super::DbPool;

impl DbPool {
    /// Record advisory output for a farmer, optionally scoped to one field.
    ///
    /// New recommendations start as `pending`.
    pub async fn create_recommendation(
        &self,
        new: NewRecommendation,
    ) -> AppResult<recommendation::Model> {
        require_text("recommendation_text", &new.recommendation_text)?;
        let now = Utc::now();

        let model = ActiveModel {
            id: NotSet,
            farmer_id: Set(new.farmer_id),
            field_id: Set(new.field_id),
            recommendation_type: Set(new.recommendation_type),
            recommendation_text: Set(new.recommendation_text),
            priority: Set(new.priority.as_str().to_string()),
            status: Set(RecommendationStatus::Pending.as_str().to_string()),
            valid_until: Set(new.valid_until),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(self.connection()).await?;

        info!(
            recommendation_id = result.id,
            farmer_id = result.farmer_id,
            priority = %result.priority,
            "Recorded recommendation"
        );
        Ok(result)
    }

    /// Get a recommendation by ID.
    pub async fn get_recommendation(&self, id: i32) -> AppResult<recommendation::Model> {
        Recommendation::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recommendation {}", id)))
    }

    /// Record whether the farmer acted on a recommendation.
    pub async fn update_recommendation_status(
        &self,
        id: i32,
        status: RecommendationStatus,
    ) -> AppResult<recommendation::Model> {
        let rec = self.get_recommendation(id).await?;

        let mut active: ActiveModel = rec.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let result = active.update(self.connection()).await?;
        Ok(result)
    }

    /// A farmer's recommendations, newest first, optionally by status.
    pub async fn list_recommendations(
        &self,
        farmer_id: i32,
        status: Option<RecommendationStatus>,
    ) -> AppResult<Vec<recommendation::Model>> {
        let mut select =
            Recommendation::find().filter(recommendation::Column::FarmerId.eq(farmer_id));

        if let Some(status) = status {
            select = select.filter(recommendation::Column::Status.eq(status.as_str()));
        }

        let result = select
            .order_by_desc(recommendation::Column::CreatedAt)
            .order_by_desc(recommendation::Column::Id)
            .all(self.connection())
            .await?;

        Ok(result)
    }
}
