//! Database queries for weather observations.
//!
//! Observations are keyed by free-text location and are not tied to fields.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entity::weather_observation::{self, ActiveModel, Entity as WeatherObservation};
use crate::error::AppResult;
use crate::models::{NewWeatherObservation, require_text};

use super::DbPool;

impl DbPool {
    /// Store one observation. The same location/date may be recorded twice.
    pub async fn record_weather(
        &self,
        new: NewWeatherObservation,
    ) -> AppResult<weather_observation::Model> {
        require_text("location", &new.location)?;

        let model = ActiveModel {
            id: NotSet,
            location: Set(new.location),
            observation_date: Set(new.observation_date),
            temperature_min: Set(new.temperature_min),
            temperature_max: Set(new.temperature_max),
            humidity: Set(new.humidity),
            rainfall: Set(new.rainfall),
            wind_speed: Set(new.wind_speed),
            created_at: Set(Utc::now()),
        };

        let result = model.insert(self.connection()).await?;
        Ok(result)
    }

    /// Observations for a location within an inclusive date range, oldest first.
    pub async fn list_weather(
        &self,
        location: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<weather_observation::Model>> {
        let mut select = WeatherObservation::find()
            .filter(weather_observation::Column::Location.eq(location));

        if let Some(from) = from {
            select = select.filter(weather_observation::Column::ObservationDate.gte(from));
        }
        if let Some(to) = to {
            select = select.filter(weather_observation::Column::ObservationDate.lte(to));
        }

        let result = select
            .order_by_asc(weather_observation::Column::ObservationDate)
            .order_by_asc(weather_observation::Column::Id)
            .all(self.connection())
            .await?;

        Ok(result)
    }
}
