//! Single PostgreSQL connection
//!
//! One connection is opened per run and shared by every step. The driver
//! half of the connection runs as a tokio task until the client is dropped.

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use std::future::Future;
use std::pin::Pin;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error, info};

/// An open database connection bound to one breed table
pub struct Database {
    client: Client,
    table: String,
    driver: JoinHandle<()>,
}

impl Database {
    /// Open a connection
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pg_config = config.to_pg_config()?;

        debug!("Connecting to {}", config.describe());
        let (client, connection) = pg_config.connect(NoTls).await?;

        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("Database connection error: {e}");
            }
        });

        info!("Connected to {}", config.describe());
        Ok(Self {
            client,
            table: config.table.clone(),
            driver,
        })
    }

    /// The underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Mutable client, needed to open a transaction
    pub fn client_mut(&mut self) -> &mut Client {
        &mut self.client
    }

    /// Name of the partitioned breed table
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Close the connection and wait for the driver task to finish
    pub async fn close(self) -> Result<()> {
        let Self { client, driver, .. } = self;
        drop(client);
        driver
            .await
            .map_err(|e| Error::Other(format!("Database driver task failed: {e}")))?;
        debug!("Database connection closed");
        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("table", &self.table)
            .field("closed", &self.client.is_closed())
            .finish_non_exhaustive()
    }
}

/// Future returned by a `with_database` body
pub type DatabaseFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Run `body` with an open connection, closing it on every exit path.
///
/// The body's error wins over a close error.
///
/// ```rust,ignore
/// let count = with_database(&config.database, |db| {
///     Box::pin(async move { count_by_country(db, "United States").await })
/// })
/// .await?;
/// ```
pub async fn with_database<T, F>(config: &DatabaseConfig, body: F) -> Result<T>
where
    F: for<'a> FnOnce(&'a mut Database) -> DatabaseFuture<'a, T>,
{
    let mut db = Database::connect(config).await?;
    let result = body(&mut db).await;
    let closed = db.close().await;

    match (result, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            error!("Failed to close database connection: {close_err}");
            Err(e)
        }
    }
}
