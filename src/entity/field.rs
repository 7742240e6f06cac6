//! Field (land parcel) entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub field_id: i32,
    pub farmer_id: i32,
    pub field_name: String,
    /// Size in hectares
    pub field_size: Option<f64>,
    pub field_location: Option<String>,
    pub soil_type: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::farmer::Entity",
        from = "Column::FarmerId",
        to = "super::farmer::Column::Id",
        on_delete = "Cascade"
    )]
    Farmer,
    #[sea_orm(has_many = "super::field_crop::Entity")]
    FieldCrops,
    #[sea_orm(has_many = "super::farm_task::Entity")]
    Tasks,
    #[sea_orm(has_many = "super::recommendation::Entity")]
    Recommendations,
}

impl Related<super::farmer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmer.def()
    }
}

impl Related<super::field_crop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldCrops.def()
    }
}

impl Related<super::farm_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl Related<super::recommendation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recommendations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
