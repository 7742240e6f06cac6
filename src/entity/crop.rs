//! Crop catalog entity for SeaORM.
//!
//! Field-crops reference catalog rows by name only; there is no relation here.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "crops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub crop_name: String,
    pub crop_type: Option<String>,
    /// Typical cycle length in days
    pub growing_period_days: Option<i32>,
    pub croatian_name: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
