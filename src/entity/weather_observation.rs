//! Weather observation entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weather_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location: String,
    pub observation_date: Date,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Rainfall in millimetres
    pub rainfall: Option<f64>,
    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
