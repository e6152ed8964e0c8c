//! Database layer for Community Hub
//!
//! Provides:
//! - SeaORM entity models for the six content tables
//! - Closed filter structs and the query builder
//! - Repository implementing the read-only `ContentStore`
//! - Connection pool management and table provisioning

pub mod filters;
pub mod models;
mod repository;

pub use filters::{
    ContentQuery, EconomicFilter, EventFilter, HealthResourceFilter, HistoryFilter, NewsFilter,
    ResourceFilter,
};
pub use repository::Repository;

use crate::config::DatabaseConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use models::*;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use std::time::Duration;
use tracing::info;

/// Read-only access to the content tables.
///
/// Handlers only see this trait; `Repository` is the database-backed
/// implementation. Every method issues a single round-trip.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>>;

    async fn events(&self, filter: &EventFilter) -> Result<Vec<Event>>;

    async fn historical_content(&self, filter: &HistoryFilter) -> Result<Vec<HistoricalContent>>;

    async fn health_resources(&self, filter: &HealthResourceFilter) -> Result<Vec<HealthResource>>;

    async fn news_articles(&self, filter: &NewsFilter) -> Result<Vec<NewsArticle>>;

    async fn economic_content(&self, filter: &EconomicFilter) -> Result<Vec<EconomicContent>>;

    /// Check store connectivity
    async fn ping(&self) -> Result<()>;

    /// Create any missing content tables, returning every table name
    async fn provision(&self) -> Result<Vec<String>>;
}

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DbPool {
    /// Primary connection
    pub primary: DatabaseConnection,

    /// Read replica connection (optional)
    pub replica: Option<DatabaseConnection>,
}

fn connect_options(url: &str, config: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .sqlx_logging(true);
    opts
}

impl DbPool {
    /// Create a new database pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to primary database...");

        let primary = Database::connect(connect_options(&config.url, config))
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Failed to connect to primary: {}", e)
            })?;

        // Connect to replica if configured
        let replica = if let Some(ref read_url) = config.read_url {
            info!("Connecting to read replica...");

            let replica_conn = Database::connect(connect_options(read_url, config))
                .await
                .map_err(|e| AppError::DatabaseConnection {
                    message: format!("Failed to connect to replica: {}", e)
                })?;

            Some(replica_conn)
        } else {
            None
        };

        info!("Database connections established");

        Ok(Self { primary, replica })
    }

    /// Wrap an already open connection
    pub fn from_connection(primary: DatabaseConnection) -> Self {
        Self { primary, replica: None }
    }

    /// Get the connection for reads (replica if available, otherwise primary)
    pub fn read(&self) -> &DatabaseConnection {
        self.replica.as_ref().unwrap_or(&self.primary)
    }

    /// Get the connection for schema changes (always primary)
    pub fn write(&self) -> &DatabaseConnection {
        &self.primary
    }

    /// Ping the database to check connectivity
    pub async fn ping(&self) -> Result<()> {
        self.primary
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Primary ping failed: {}", e),
            })?;

        if let Some(ref replica) = self.replica {
            replica
                .execute_unprepared("SELECT 1")
                .await
                .map_err(|e| AppError::DatabaseConnection {
                    message: format!("Replica ping failed: {}", e),
                })?;
        }

        Ok(())
    }
}

async fn create_if_absent<E>(conn: &DatabaseConnection, entity: E) -> Result<String>
where
    E: EntityTrait,
{
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();

    conn.execute(backend.build(&table)).await?;

    Ok(entity.table_name().to_string())
}

/// Create the six content tables if they do not exist yet.
///
/// Safe to run repeatedly; existing tables and rows are left untouched.
pub async fn provision(conn: &DatabaseConnection) -> Result<Vec<String>> {
    let tables = vec![
        create_if_absent(conn, ResourceEntity).await?,
        create_if_absent(conn, EventEntity).await?,
        create_if_absent(conn, HistoricalContentEntity).await?,
        create_if_absent(conn, HealthResourceEntity).await?,
        create_if_absent(conn, NewsArticleEntity).await?,
        create_if_absent(conn, EconomicContentEntity).await?,
    ];

    info!(tables = ?tables, "Content tables provisioned");
    Ok(tables)
}
