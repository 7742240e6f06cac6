//! Field-crop (planting) entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "field_crops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub field_id: i32,
    /// Free-text crop name, matched against the catalog at read time
    pub crop_name: String,
    pub variety: Option<String>,
    pub planting_date: Option<Date>,
    pub expected_harvest_date: Option<Date>,
    pub actual_harvest_date: Option<Date>,
    /// active, harvested, failed
    pub status: String,
    pub yield_tons: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::field::Entity",
        from = "Column::FieldId",
        to = "super::field::Column::FieldId",
        on_delete = "Cascade"
    )]
    Field,
}

impl Related<super::field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Field.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
