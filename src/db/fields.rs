//! Database queries for the field ledger.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbBackend, EntityTrait, FromQueryResult, NotSet, QueryFilter,
    QueryOrder, Set, Statement,
};
use tracing::info;

use crate::entity::field::{self, ActiveModel, Entity as Field};
use crate::error::{AppError, AppResult};
use crate::models::{FieldOverview, FieldUpdate, NewField, require_text};

use super::DbPool;

impl DbPool {
    /// Record a land parcel for an existing farmer.
    ///
    /// An unknown `farmer_id` fails with `ForeignKeyViolation`.
    pub async fn create_field(&self, new: NewField) -> AppResult<field::Model> {
        require_text("field_name", &new.field_name)?;
        let now = Utc::now();

        let model = ActiveModel {
            field_id: NotSet,
            farmer_id: Set(new.farmer_id),
            field_name: Set(new.field_name),
            field_size: Set(new.field_size),
            field_location: Set(new.field_location),
            soil_type: Set(new.soil_type),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(self.connection()).await?;
        Ok(result)
    }

    /// Get a field by ID.
    pub async fn get_field(&self, field_id: i32) -> AppResult<field::Model> {
        Field::find_by_id(field_id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Field {}", field_id)))
    }

    /// All fields of a farmer, ordered by name.
    pub async fn list_fields(&self, farmer_id: i32) -> AppResult<Vec<field::Model>> {
        let result = Field::find()
            .filter(field::Column::FarmerId.eq(farmer_id))
            .order_by_asc(field::Column::FieldName)
            .all(self.connection())
            .await?;

        Ok(result)
    }

    /// Each field of a farmer with its active planting, if any.
    ///
    /// Fields without an active planting are listed with empty crop columns.
    pub async fn get_farmer_fields_overview(&self, farmer_id: i32) -> AppResult<Vec<FieldOverview>> {
        let sql = r#"
            SELECT f.field_id, f.field_name, f.field_size, f.field_location, f.soil_type,
                   fc.crop_name AS current_crop, fc.variety, fc.planting_date,
                   fc.status AS crop_status
            FROM fields f
            LEFT JOIN field_crops fc
                ON fc.field_id = f.field_id AND fc.status = 'active'
            WHERE f.farmer_id = $1
            ORDER BY f.field_name, f.field_id, fc.planting_date DESC NULLS LAST
        "#;

        let result = FieldOverview::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [sea_orm::Value::from(farmer_id)],
        ))
        .all(self.connection())
        .await?;

        Ok(result)
    }

    /// Update a field field by field.
    pub async fn update_field(&self, field_id: i32, update: FieldUpdate) -> AppResult<field::Model> {
        let field = self.get_field(field_id).await?;

        let mut active: ActiveModel = field.into();
        if let Some(name) = update.field_name {
            require_text("field_name", &name)?;
            active.field_name = Set(name);
        }
        if let Some(size) = update.field_size {
            active.field_size = Set(size);
        }
        if let Some(location) = update.field_location {
            active.field_location = Set(location);
        }
        if let Some(soil) = update.soil_type {
            active.soil_type = Set(soil);
        }
        active.updated_at = Set(Utc::now());

        let result = active.update(self.connection()).await?;
        Ok(result)
    }

    /// Delete a field.
    ///
    /// Its plantings go with it; tasks and recommendations keep their row with
    /// the field link cleared.
    pub async fn delete_field(&self, field_id: i32) -> AppResult<()> {
        let result = Field::delete_by_id(field_id).exec(self.connection()).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Field {}", field_id)));
        }

        info!(field_id, "Deleted field and its plantings");
        Ok(())
    }
}
