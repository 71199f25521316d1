use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Executor, Pool, Row, Sqlite,
};
use tokio::sync::Mutex;

use crate::error::Error;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, Error>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;
    async fn remove_item(&self, key: &str) -> Result<(), Error>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), Error> {
        (**self).remove_item(key).await
    }
}

#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    #[tracing::instrument(name = "SqliteStore::new")]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(db_uri)?.create_if_missing(true);
        let pool_options = SqlitePoolOptions::new().max_connections(max_connections);

        Self::connect(pool_options, options).await
    }

    /// In-memory database. It lives only as long as its connection, so the
    /// pool keeps exactly one connection open for the store's lifetime.
    pub async fn in_memory() -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool_options = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);

        Self::connect(pool_options, options).await
    }

    async fn connect(
        pool_options: SqlitePoolOptions,
        options: SqliteConnectOptions,
    ) -> Result<Self, Error> {
        let pool = pool_options.connect_with(options).await?;

        pool.execute("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    #[tracing::instrument(skip(self))]
    async fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT value FROM kv WHERE key = ?1").bind(key))
            .await?;

        match maybe_result {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self, value))]
    async fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO kv (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )
            .bind(key)
            .bind(value),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(sqlx::query("DELETE FROM kv WHERE key = ?1").bind(key))
            .await?;

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.items.lock().await.insert(key.into(), value.into());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.items.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct UnavailableStore;

#[cfg(test)]
#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn get_item(&self, _: &str) -> Result<Option<String>, Error> {
        Err(crate::error::storage_error("unavailable"))
    }

    async fn set_item(&self, _: &str, _: &str) -> Result<(), Error> {
        Err(crate::error::storage_error("unavailable"))
    }

    async fn remove_item(&self, _: &str) -> Result<(), Error> {
        Err(crate::error::storage_error("unavailable"))
    }
}
