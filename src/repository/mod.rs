//! Persistence gateway.
//!
//! [`RewardsRepository`] owns the database connection and exposes the
//! create/read/update operations for the four tracking tables. Migrations run
//! once at connect time. Designator assignment is an explicit, synchronous
//! step inside [`RewardsRepository::create_campaign`]; there is no listener
//! registry firing behind the ORM's back.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::{Result, RewardsError};

use migration::{Migrator, MigratorTrait};

mod campaigns;
mod conversions;
mod featured;
mod inflows;

#[derive(Clone)]
pub struct RewardsRepository {
    db: DatabaseConnection,
    backend_name: String,
}

impl RewardsRepository {
    /// Connect, run pending migrations and return a ready repository.
    ///
    /// The backend is inferred from the URL scheme: `sqlite:` gets the tuned
    /// single-file path, `mysql:`/`postgres:` the pooled one.
    pub async fn connect(database_url: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(RewardsError::database_config("DATABASE_URL is empty"));
        }

        let backend_name = database_url.split(':').next().unwrap_or_default();

        let db = match backend_name {
            "sqlite" => Self::connect_sqlite(database_url).await?,
            "mysql" | "postgres" | "postgresql" => {
                Self::connect_generic(database_url, backend_name).await?
            }
            "mariadb" => {
                // sqlx only parses mysql:// URLs; MariaDB speaks the same
                // protocol, so rewrite the scheme before connecting.
                let url = mariadb_to_mysql_url(database_url);
                Self::connect_generic(&url, backend_name).await?
            }
            other => {
                return Err(RewardsError::database_config(format!(
                    "Unknown database backend: '{}'. Supported: sqlite, mysql, mariadb, postgres",
                    other
                )));
            }
        };

        let repository = RewardsRepository {
            db,
            backend_name: backend_name.to_string(),
        };

        repository.run_migrations().await?;

        info!(
            "{} repository initialized",
            repository.backend_name.to_uppercase()
        );
        Ok(repository)
    }

    /// Connect using the `DATABASE_URL` environment variable, loading a local
    /// `.env` file first if one exists.
    pub async fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| RewardsError::database_config("DATABASE_URL is not set"))?;

        Self::connect(&database_url).await
    }

    /// Underlying connection, mainly for migration tooling and tests.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// SQLite connection with auto-create and write-burst tuning.
    async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::SqlitePool;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                RewardsError::database_config(format!("Failed to parse SQLite URL: {}", e))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // conversions carry an enforced reference to campaigns.designator
            .foreign_keys(true)
            .busy_timeout(std::time::Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePool::connect_with(opt).await.map_err(|e| {
            RewardsError::database_connection(format!("Failed to connect to SQLite: {}", e))
        })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Pooled MySQL/PostgreSQL connection.
    async fn connect_generic(database_url: &str, backend_name: &str) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(100)
            .min_connections(5)
            .connect_timeout(std::time::Duration::from_secs(8))
            .acquire_timeout(std::time::Duration::from_secs(8))
            .idle_timeout(std::time::Duration::from_secs(8))
            .sqlx_logging(false);

        Database::connect(opt).await.map_err(|e| {
            RewardsError::database_connection(format!(
                "Failed to connect to {} database: {}",
                backend_name.to_uppercase(),
                e
            ))
        })
    }

    async fn run_migrations(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| RewardsError::database_operation(format!("Migration failed: {}", e)))?;

        info!("Database migrations completed");
        Ok(())
    }

    /// Unique-constraint violation, detected by driver error code.
    fn is_unique_violation(err: &sea_orm::sqlx::Error) -> bool {
        Self::has_error_code(err, &["2067", "1062", "23505"])
    }

    /// Foreign-key violation, detected by driver error code. Only conversion
    /// inserts/updates can trip this; inflows carry no enforced reference.
    fn is_foreign_key_violation(err: &sea_orm::sqlx::Error) -> bool {
        Self::has_error_code(err, &["787", "1452", "23503"])
    }

    fn has_error_code(err: &sea_orm::sqlx::Error, codes: &[&str]) -> bool {
        use sea_orm::sqlx::Error;

        match err {
            Error::Database(db_err) => {
                // Codes per backend: SQLite extended, MySQL, PostgreSQL.
                db_err
                    .code()
                    .as_ref()
                    .map(|c| codes.contains(&c.as_ref()))
                    .unwrap_or(false)
            }
            _ => false,
        }
    }
}

fn mariadb_to_mysql_url(database_url: &str) -> String {
    database_url.replacen("mariadb:", "mysql:", 1)
}
