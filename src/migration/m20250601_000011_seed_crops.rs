//! Migration: Seed the crop catalog.
//!
//! Runs once, tracked by the migrator. Rows that already exist by name are left
//! alone so catalog maintenance done before this migration is preserved.

use sea_orm_migration::prelude::*;

/// One catalog row: (name, type, typical cycle in days, Croatian name).
pub type SeedCrop = (&'static str, &'static str, i32, &'static str);

pub const SEED_CROPS: [SeedCrop; 12] = [
    ("Corn", "cereal", 120, "Kukuruz"),
    ("Wheat", "cereal", 200, "Pšenica"),
    ("Barley", "cereal", 180, "Ječam"),
    ("Sunflower", "oilseed", 120, "Suncokret"),
    ("Soybean", "legume", 130, "Soja"),
    ("Rapeseed", "oilseed", 270, "Uljana repica"),
    ("Potato", "vegetable", 90, "Krumpir"),
    ("Tomato", "vegetable", 80, "Rajčica"),
    ("Sugar Beet", "industrial", 180, "Šećerna repa"),
    ("Tobacco", "industrial", 120, "Duhan"),
    ("Grapes", "fruit", 180, "Vinova loza"),
    ("Olives", "fruit", 240, "Masline"),
];

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Build the idempotent insert for the seed rows.
pub fn seed_sql() -> String {
    let rows: Vec<String> = SEED_CROPS
        .iter()
        .map(|(name, crop_type, days, croatian)| {
            format!(
                "({}, {}, {}, {})",
                quote(name),
                quote(crop_type),
                days,
                quote(croatian)
            )
        })
        .collect();

    format!(
        "INSERT INTO crops (crop_name, crop_type, growing_period_days, croatian_name) VALUES {} ON CONFLICT (crop_name) DO NOTHING;",
        rows.join(", ")
    )
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&seed_sql())
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<String> = SEED_CROPS.iter().map(|(name, ..)| quote(name)).collect();
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "DELETE FROM crops WHERE crop_name IN ({});",
                names.join(", ")
            ))
            .await?;

        Ok(())
    }
}
