//! Database queries for the crop catalog.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entity::crop::{self, ActiveModel, Entity as Crop};
use crate::error::AppResult;
use crate::models::{NewCrop, require_text};

use super::DbPool;

impl DbPool {
    /// Whole catalog, ordered by name.
    pub async fn list_crops(&self) -> AppResult<Vec<crop::Model>> {
        let result = Crop::find()
            .order_by_asc(crop::Column::CropName)
            .all(self.connection())
            .await?;

        Ok(result)
    }

    /// Case-insensitive catalog lookup. Absence is not an error.
    ///
    /// Names are unique ignoring case, so at most one row matches.
    pub async fn find_crop_by_name(&self, crop_name: &str) -> AppResult<Option<crop::Model>> {
        let result = Crop::find()
            .filter(Expr::cust_with_values(
                "LOWER(crop_name) = LOWER($1)",
                [crop_name.trim()],
            ))
            .order_by_asc(crop::Column::Id)
            .one(self.connection())
            .await?;

        Ok(result)
    }

    /// Catalog maintenance: insert an entry, or refresh the one with the same
    /// name ignoring case. A refreshed entry keeps its stored spelling.
    pub async fn upsert_crop(&self, new: NewCrop) -> AppResult<crop::Model> {
        require_text("crop_name", &new.crop_name)?;

        let existing = self.find_crop_by_name(&new.crop_name).await?;

        let result = match existing {
            Some(m) => {
                let mut active: ActiveModel = m.into();
                active.crop_type = Set(new.crop_type);
                active.growing_period_days = Set(new.growing_period_days);
                active.croatian_name = Set(new.croatian_name);
                active.update(self.connection()).await?
            }
            None => {
                let model = ActiveModel {
                    id: NotSet,
                    crop_name: Set(new.crop_name.trim().to_string()),
                    crop_type: Set(new.crop_type),
                    growing_period_days: Set(new.growing_period_days),
                    croatian_name: Set(new.croatian_name),
                    created_at: Set(Utc::now()),
                };
                model.insert(self.connection()).await?
            }
        };

        info!(crop = %result.crop_name, "Catalog entry saved");
        Ok(result)
    }
}
