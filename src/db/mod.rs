//! Database module providing connection management, migrations, and queries.
//!
//! Every query module adds methods to [`DbPool`]. Cascades and link-clearing on
//! delete are declared as foreign-key actions in the schema, so each delete is a
//! single statement and its cascade is all-or-nothing.

pub mod conversations;
pub mod crops;
pub mod diagnostics;
pub mod farmers;
pub mod field_crops;
pub mod fields;
pub mod recommendations;
pub mod tasks;
pub mod views;
pub mod weather;

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Shared handle to the PostgreSQL connection pool.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect using the pool settings from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let settings = &config.database;

        let mut options = ConnectOptions::new(settings.url.clone());
        options
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .sqlx_logging(settings.sql_logging);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        debug!(
            max_connections = settings.max_connections,
            "Database pool created"
        );

        Ok(Self { conn })
    }

    /// Wrap an existing connection (used with SeaORM's mock backend in tests).
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get access to the underlying connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Apply all pending migrations. Already-applied ones are skipped, so the
    /// crop catalog is seeded exactly once per store.
    pub async fn run_migrations(&self) -> AppResult<()> {
        let pending = Migrator::get_pending_migrations(&self.conn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read migration state: {}", e)))?;

        if pending.is_empty() {
            info!("No pending migrations");
            return Ok(());
        }

        info!("{} migration(s) pending", pending.len());

        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;

        info!("Migrations applied successfully");
        Ok(())
    }

    /// Verify the store answers a trivial query.
    pub async fn ping(&self) -> AppResult<()> {
        let stmt = Statement::from_string(self.conn.get_database_backend(), "SELECT 1".to_owned());
        self.conn
            .query_one_raw(stmt)
            .await
            .map_err(|e| AppError::Database(format!("Database ping failed: {}", e)))?;
        Ok(())
    }
}
