//! Farm records store - schema bootstrap entry point.
//!
//! Connects to PostgreSQL, applies pending migrations (including the crop
//! catalog seed) and reports the state of the store.

use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use farm_records::{Config, DbPool};

/// Perform health check (for container HEALTHCHECK).
async fn health_check() -> bool {
    let Ok(config) = Config::from_env() else {
        return false;
    };
    match DbPool::new(&config).await {
        Ok(pool) => pool.ping().await.is_ok(),
        Err(_) => false,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        if health_check().await {
            std::process::exit(0);
        } else {
            std::process::exit(1);
        }
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        std::process::exit(1);
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set to a PostgreSQL URL");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Farm Records Store");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database connection established");

    if let Err(e) = pool.run_migrations().await {
        error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    match pool.list_crops().await {
        Ok(crops) => info!("Crop catalog holds {} entries", crops.len()),
        Err(e) => warn!("Failed to read crop catalog: {}", e),
    }

    match pool.count_farmers().await {
        Ok(count) => info!("{} farmer(s) registered", count),
        Err(e) => warn!("Failed to count farmers: {}", e),
    }

    match pool.system_status().await {
        Ok(rows) if rows.is_empty() => info!("No health samples in the last 24 hours"),
        Ok(rows) => {
            for row in rows {
                info!(
                    component = %row.component,
                    status = %row.status,
                    checks = row.check_count,
                    avg_response_time_ms = ?row.avg_response_time_ms,
                    "Component status"
                );
            }
        }
        Err(e) => warn!("Failed to read system status: {}", e),
    }

    info!("Store ready");
}
