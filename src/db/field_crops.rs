//! Database queries for plantings (field-crops).

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use tracing::debug;

use crate::entity::field_crop::{self, ActiveModel, Entity as FieldCrop};
use crate::error::{AppError, AppResult};
use crate::models::{CropStatus, FieldCropUpdate, NewFieldCrop, require_text};

use super::DbPool;

impl DbPool {
    /// Record a planting on an existing field.
    ///
    /// The crop name is not checked against the catalog; an unknown name is
    /// stored as given. An unknown `field_id` fails with `ForeignKeyViolation`.
    pub async fn create_field_crop(&self, new: NewFieldCrop) -> AppResult<field_crop::Model> {
        require_text("crop_name", &new.crop_name)?;
        let now = Utc::now();

        let model = ActiveModel {
            id: NotSet,
            field_id: Set(new.field_id),
            crop_name: Set(new.crop_name),
            variety: Set(new.variety),
            planting_date: Set(new.planting_date),
            expected_harvest_date: Set(new.expected_harvest_date),
            actual_harvest_date: Set(None),
            status: Set(new.status.as_str().to_string()),
            yield_tons: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(self.connection()).await?;
        Ok(result)
    }

    /// Get a planting by ID.
    pub async fn get_field_crop(&self, id: i32) -> AppResult<field_crop::Model> {
        FieldCrop::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Field crop {}", id)))
    }

    /// Plantings of one field, newest planting first, optionally by status.
    pub async fn list_field_crops(
        &self,
        field_id: i32,
        status: Option<CropStatus>,
    ) -> AppResult<Vec<field_crop::Model>> {
        let mut select = FieldCrop::find().filter(field_crop::Column::FieldId.eq(field_id));

        if let Some(status) = status {
            select = select.filter(field_crop::Column::Status.eq(status.as_str()));
        }

        let result = select
            .order_by_desc(field_crop::Column::PlantingDate)
            .order_by_desc(field_crop::Column::Id)
            .all(self.connection())
            .await?;

        Ok(result)
    }

    /// Apply a caller-driven lifecycle update.
    ///
    /// Dates and status are stored as given; setting `actual_harvest_date` does
    /// not change the status.
    pub async fn update_field_crop(
        &self,
        id: i32,
        update: FieldCropUpdate,
    ) -> AppResult<field_crop::Model> {
        let crop = self.get_field_crop(id).await?;

        let mut active: ActiveModel = crop.into();
        if let Some(status) = update.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(variety) = update.variety {
            active.variety = Set(variety);
        }
        if let Some(date) = update.expected_harvest_date {
            active.expected_harvest_date = Set(date);
        }
        if let Some(date) = update.actual_harvest_date {
            active.actual_harvest_date = Set(date);
        }
        if let Some(tons) = update.yield_tons {
            active.yield_tons = Set(tons);
        }
        active.updated_at = Set(Utc::now());

        let result = active.update(self.connection()).await?;
        Ok(result)
    }

    /// Set a planting's status.
    pub async fn set_field_crop_status(
        &self,
        id: i32,
        status: CropStatus,
    ) -> AppResult<field_crop::Model> {
        debug!(field_crop_id = id, status = status.as_str(), "Updating planting status");

        self.update_field_crop(
            id,
            FieldCropUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }
}
