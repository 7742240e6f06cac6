//! Farm task (logged field operation) entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "farm_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farmer_id: i32,
    pub field_id: Option<i32>,
    pub task_type: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub task_date: Option<Date>,
    /// planned, in_progress, completed, cancelled
    pub status: String,
    pub cost: Option<f64>,
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
    #[sea_orm(
        belongs_to = "super::field::Entity",
        from = "Column::FieldId",
        to = "super::field::Column::FieldId",
        on_delete = "SetNull"
    )]
    Field,
}

impl Related<super::farmer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmer.def()
    }
}

impl Related<super::field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Field.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
