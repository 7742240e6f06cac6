//! Farmer entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "farmers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// State registration number (unique when present)
    pub state_farm_number: Option<String>,
    /// Tax id (unique when present)
    pub vat_no: Option<String>,
    pub farm_name: Option<String>,
    pub manager_name: Option<String>,
    pub manager_last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Chat channel identifier
    pub wa_phone_number: Option<String>,
    pub street_and_no: Option<String>,
    pub city: Option<String>,
    pub farmer_type: Option<String>,
    pub secondary_farmer_type: Option<String>,
    pub total_hectares: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::field::Entity")]
    Fields,
    #[sea_orm(has_many = "super::conversation::Entity")]
    Conversations,
    #[sea_orm(has_many = "super::recommendation::Entity")]
    Recommendations,
    #[sea_orm(has_many = "super::farm_task::Entity")]
    Tasks,
    #[sea_orm(has_many = "super::llm_operation_log::Entity")]
    LlmOperationLogs,
}

impl Related<super::field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fields.def()
    }
}

impl Related<super::conversation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversations.def()
    }
}

impl Related<super::recommendation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recommendations.def()
    }
}

impl Related<super::farm_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl Related<super::llm_operation_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LlmOperationLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
