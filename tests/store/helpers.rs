//! Shared helpers for store integration tests.

use farm_records::config::{Config, DatabaseSettings, Environment};
use farm_records::db::DbPool;
use farm_records::entity::{farmer, field};
use farm_records::models::{NewFarmer, NewField};
use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATIONS_RUN: OnceCell<()> = OnceCell::const_new();

/// Create a fresh DB pool, or `None` when no database is configured.
/// Migrations run only once per suite.
pub async fn test_pool() -> Option<DbPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping store integration test");
        return None;
    };

    let mut settings = DatabaseSettings::with_url(url);
    settings.max_connections = 2;
    settings.min_connections = 1;
    let config = Config {
        environment: Environment::Development,
        database: settings,
    };

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");

    MIGRATIONS_RUN
        .get_or_try_init(|| async { pool.run_migrations().await })
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Short random suffix for test isolation.
pub fn unique(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &id[..12])
}

/// Register a farmer with unique registration number and tax id.
pub async fn create_farmer(pool: &DbPool, farm_name: &str) -> farmer::Model {
    pool.create_farmer(NewFarmer {
        state_farm_number: Some(unique("SFN")),
        vat_no: Some(unique("VAT")),
        farm_name: Some(farm_name.to_string()),
        manager_name: Some("Ivan".to_string()),
        manager_last_name: Some("Horvat".to_string()),
        city: Some("Osijek".to_string()),
        wa_phone_number: Some(unique("+385")),
        total_hectares: Some(25.0),
        ..Default::default()
    })
    .await
    .expect("Failed to create farmer")
}

/// Record a field for the given farmer.
pub async fn create_field(pool: &DbPool, farmer_id: i32, name: &str) -> field::Model {
    pool.create_field(NewField {
        farmer_id,
        field_name: name.to_string(),
        field_size: Some(12.5),
        soil_type: Some("chernozem".to_string()),
        ..Default::default()
    })
    .await
    .expect("Failed to create field")
}
