//! Database queries for the farmer registry.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{debug, info};

use crate::entity::farmer::{self, ActiveModel, Entity as Farmer};
use crate::error::{AppError, AppResult};
use crate::models::{FarmerUpdate, NewFarmer, clamp_limit};

use super::DbPool;

impl DbPool {
    /// Register a farmer.
    ///
    /// Fails with `UniquenessViolation` when the registration number or tax id
    /// already belongs to another farmer.
    pub async fn create_farmer(&self, new: NewFarmer) -> AppResult<farmer::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: NotSet,
            state_farm_number: Set(new.state_farm_number),
            vat_no: Set(new.vat_no),
            farm_name: Set(new.farm_name),
            manager_name: Set(new.manager_name),
            manager_last_name: Set(new.manager_last_name),
            email: Set(new.email),
            phone: Set(new.phone),
            wa_phone_number: Set(new.wa_phone_number),
            street_and_no: Set(new.street_and_no),
            city: Set(new.city),
            farmer_type: Set(new.farmer_type),
            secondary_farmer_type: Set(new.secondary_farmer_type),
            total_hectares: Set(new.total_hectares),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(self.connection()).await?;

        info!(farmer_id = result.id, "Registered farmer");
        Ok(result)
    }

    /// Get a farmer by ID.
    pub async fn get_farmer(&self, id: i32) -> AppResult<farmer::Model> {
        Farmer::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Farmer {}", id)))
    }

    /// Find the farmer behind a chat channel number.
    pub async fn find_farmer_by_wa_phone(
        &self,
        wa_phone_number: &str,
    ) -> AppResult<Option<farmer::Model>> {
        debug!(wa_phone_number, "Looking up farmer by chat number");

        let result = Farmer::find()
            .filter(farmer::Column::WaPhoneNumber.eq(wa_phone_number))
            .order_by_asc(farmer::Column::Id)
            .one(self.connection())
            .await?;

        Ok(result)
    }

    /// List farmers ordered by farm name.
    pub async fn list_farmers(&self, limit: Option<u64>) -> AppResult<Vec<farmer::Model>> {
        let result = Farmer::find()
            .order_by_asc(farmer::Column::FarmName)
            .order_by_asc(farmer::Column::Id)
            .limit(clamp_limit(limit))
            .all(self.connection())
            .await?;

        Ok(result)
    }

    /// Count registered farmers.
    pub async fn count_farmers(&self) -> AppResult<u64> {
        let count = Farmer::find().count(self.connection()).await?;
        Ok(count)
    }

    /// Update a farmer field by field; `Some(None)` clears a column. Only the
    /// unique columns are checked.
    pub async fn update_farmer(&self, id: i32, update: FarmerUpdate) -> AppResult<farmer::Model> {
        let farmer = self.get_farmer(id).await?;

        if update.is_empty() {
            return Ok(farmer);
        }

        let mut active: ActiveModel = farmer.into();
        if let Some(v) = update.state_farm_number {
            active.state_farm_number = Set(v);
        }
        if let Some(v) = update.vat_no {
            active.vat_no = Set(v);
        }
        if let Some(v) = update.farm_name {
            active.farm_name = Set(v);
        }
        if let Some(v) = update.manager_name {
            active.manager_name = Set(v);
        }
        if let Some(v) = update.manager_last_name {
            active.manager_last_name = Set(v);
        }
        if let Some(v) = update.email {
            active.email = Set(v);
        }
        if let Some(v) = update.phone {
            active.phone = Set(v);
        }
        if let Some(v) = update.wa_phone_number {
            active.wa_phone_number = Set(v);
        }
        if let Some(v) = update.street_and_no {
            active.street_and_no = Set(v);
        }
        if let Some(v) = update.city {
            active.city = Set(v);
        }
        if let Some(v) = update.farmer_type {
            active.farmer_type = Set(v);
        }
        if let Some(v) = update.secondary_farmer_type {
            active.secondary_farmer_type = Set(v);
        }
        if let Some(v) = update.total_hectares {
            active.total_hectares = Set(v);
        }
        active.updated_at = Set(Utc::now());

        let result = active.update(self.connection()).await?;
        Ok(result)
    }

    /// Delete a farmer.
    ///
    /// Fields (and their plantings), tasks, conversations and recommendations go
    /// with it; LLM log entries keep their row with the farmer link cleared.
    pub async fn delete_farmer(&self, id: i32) -> AppResult<()> {
        let result = Farmer::delete_by_id(id).exec(self.connection()).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Farmer {}", id)));
        }

        info!(farmer_id = id, "Deleted farmer and owned records");
        Ok(())
    }
}
