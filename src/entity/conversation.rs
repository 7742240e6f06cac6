//! Conversation (Q&A exchange) entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farmer_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub language: String,
    pub topic: Option<String>,
    pub confidence_score: Option<f64>,
    pub wa_phone_number: Option<String>,
    pub created_at: DateTimeUtc,
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
}

impl Related<super::farmer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
