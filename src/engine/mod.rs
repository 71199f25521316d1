mod favorites_api;
mod helpers;
mod saved_places_api;
mod share_api;

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    api::API,
    catalog::Catalog,
    config::Config,
    db::{KeyValueStore, SqliteStore},
    error::Error,
    external::{ShareSheet, TracingShareSheet},
};

pub const SAVED_PLACES_KEY: &str = "saved_places";

pub struct Engine {
    store: Arc<dyn KeyValueStore>,
    catalog: Catalog,
    share_sheet: Arc<dyn ShareSheet>,
    // held across every read-modify-write of the favorites blob
    write_lock: Mutex<()>,
}

impl Engine {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        catalog: Catalog,
        share_sheet: Arc<dyn ShareSheet>,
    ) -> Self {
        Self {
            store,
            catalog,
            share_sheet,
            write_lock: Mutex::new(()),
        }
    }

    #[tracing::instrument(name = "Engine::open", skip_all)]
    pub async fn open(config: &Config) -> Result<Self, Error> {
        let store = SqliteStore::new(&config.database_url, 1).await?;

        tracing::info!(database_url = %config.database_url, "favorites storage ready");

        Ok(Self::new(
            Arc::new(store),
            Catalog::calgary(),
            Arc::new(TracingShareSheet),
        ))
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("places", &self.catalog.places().len())
            .finish()
    }
}

impl API for Engine {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}


#[test]
fn open_engine() {
    use tokio_test::block_on;

    let config = Config {
        database_url: "sqlite::memory:".into(),
        ..Config::default()
    };

    let engine = block_on(Engine::open(&config)).unwrap();
    assert_eq!(engine.catalog().places().len(), 9);
}

#[test]
fn favorites_survive_a_restart() {
    use crate::api::FavoritesAPI;
    use tokio_test::block_on;

    block_on(async {
        let store = Arc::new(SqliteStore::in_memory().await.unwrap());
        let first = Engine::new(store.clone(), Catalog::calgary(), Arc::new(TracingShareSheet));
        let park = first.catalog().find("Nose Hill Park").unwrap().clone();

        assert!(!first.is_saved("Nose Hill Park").await.unwrap());
        first.toggle_favorite(&park).await.unwrap();
        drop(first);

        let second = Engine::new(store.clone(), Catalog::calgary(), Arc::new(TracingShareSheet));
        assert!(second.is_saved("Nose Hill Park").await.unwrap());

        second.toggle_favorite(&park).await.unwrap();
        assert!(!second.is_saved("Nose Hill Park").await.unwrap());
        assert_eq!(
            store.get_item(SAVED_PLACES_KEY).await.unwrap(),
            Some("[]".to_string())
        );
    });
}
