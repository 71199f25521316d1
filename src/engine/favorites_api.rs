use super::helpers::{fetch_saved_places, update_saved_places};
use super::Engine;

use async_trait::async_trait;

use crate::{
    api::FavoritesAPI,
    entities::{Place, SaveState, SavedPlace},
    error::Error,
};

#[async_trait]
impl FavoritesAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn load_favorites(&self) -> Result<Vec<SavedPlace>, Error> {
        fetch_saved_places(self.store.as_ref()).await
    }

    #[tracing::instrument(skip(self))]
    async fn is_saved(&self, title: &str) -> Result<bool, Error> {
        let saved = fetch_saved_places(self.store.as_ref()).await?;

        Ok(saved.iter().any(|s| s.title == title))
    }

    #[tracing::instrument(skip(self, place), fields(title = %place.title))]
    async fn toggle_favorite(&self, place: &Place) -> Result<SaveState, Error> {
        let _guard = self.write_lock.lock().await;

        let mut saved = fetch_saved_places(self.store.as_ref()).await?;

        let state = match saved.iter().position(|s| s.title == place.title) {
            Some(index) => {
                saved.remove(index);
                SaveState::Unsaved
            }
            None => {
                saved.push(SavedPlace::from(place));
                SaveState::Saved
            }
        };

        update_saved_places(self.store.as_ref(), &saved).await?;

        tracing::debug!(?state, "favorite toggled");
        Ok(state)
    }

    #[tracing::instrument(skip(self))]
    async fn unsave(&self, title: &str) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let saved = fetch_saved_places(self.store.as_ref()).await?;
        let remaining: Vec<SavedPlace> = saved.into_iter().filter(|s| s.title != title).collect();

        update_saved_places(self.store.as_ref(), &remaining).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::api::{FavoritesAPI, API};
    use crate::catalog::Catalog;
    use crate::db::{KeyValueStore, MemoryStore, UnavailableStore};
    use crate::engine::testing::memory_engine;
    use crate::engine::{Engine, SAVED_PLACES_KEY};
    use crate::entities::SaveState;
    use crate::error::Error;
    use crate::external::TracingShareSheet;

    fn place(engine: &Engine, title: &str) -> crate::entities::Place {
        engine.catalog().find(title).unwrap().clone()
    }

    #[tokio::test]
    async fn missing_blob_loads_empty() {
        let (engine, _, _) = memory_engine();

        assert!(engine.load_favorites().await.unwrap().is_empty());
        assert!(!engine.is_saved("Calgary Tower").await.unwrap());
    }

    #[tokio::test]
    async fn toggle_saves_title_and_coords() {
        let (engine, store, _) = memory_engine();
        let tower = place(&engine, "Calgary Tower");

        assert_eq!(engine.toggle_favorite(&tower).await.unwrap(), SaveState::Saved);

        let blob = store.get_item(SAVED_PLACES_KEY).await.unwrap().unwrap();
        assert_eq!(
            blob,
            r#"[{"title":"Calgary Tower","coords":"📍 51.0449, -114.0631"}]"#
        );
    }

    #[tokio::test]
    async fn toggling_twice_restores_the_blob() {
        let (engine, store, _) = memory_engine();
        let park = place(&engine, "Bowness Park");
        let museum = place(&engine, "Glenbow Museum");

        engine.toggle_favorite(&park).await.unwrap();
        let before = store.get_item(SAVED_PLACES_KEY).await.unwrap();

        assert_eq!(engine.toggle_favorite(&museum).await.unwrap(), SaveState::Saved);
        assert_eq!(engine.toggle_favorite(&museum).await.unwrap(), SaveState::Unsaved);

        assert_eq!(store.get_item(SAVED_PLACES_KEY).await.unwrap(), before);
    }

    #[tokio::test]
    async fn repeated_toggles_never_duplicate() {
        let (engine, _, _) = memory_engine();
        let park = place(&engine, "Nose Hill Park");

        for _ in 0..5 {
            engine.toggle_favorite(&park).await.unwrap();
        }

        let saved = engine.load_favorites().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Nose Hill Park");
    }

    #[tokio::test]
    async fn unsave_removes_only_that_title() {
        let (engine, _, _) = memory_engine();
        engine.toggle_favorite(&place(&engine, "Bowness Park")).await.unwrap();
        engine.toggle_favorite(&place(&engine, "Calgary Tower")).await.unwrap();

        engine.unsave("Bowness Park").await.unwrap();
        engine.unsave("Not A Place").await.unwrap();

        let saved = engine.load_favorites().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Calgary Tower");
    }

    #[tokio::test]
    async fn corrupt_blob_is_reported() {
        let (engine, store, _) = memory_engine();
        store.set_item(SAVED_PLACES_KEY, "{not json").await.unwrap();

        let err = engine.load_favorites().await.unwrap_err();
        assert_eq!(err.code, 120);

        // the corrupt value is left alone rather than overwritten
        assert!(engine
            .toggle_favorite(&place(&engine, "Calgary Tower"))
            .await
            .is_err());
        assert_eq!(
            store.get_item(SAVED_PLACES_KEY).await.unwrap(),
            Some("{not json".into())
        );
    }

    #[tokio::test]
    async fn unavailable_storage_surfaces_errors() {
        let engine = Engine::new(
            Arc::new(UnavailableStore),
            Catalog::calgary(),
            Arc::new(TracingShareSheet),
        );
        let tower = engine.catalog().find("Calgary Tower").unwrap().clone();

        assert!(engine.load_favorites().await.unwrap_err().is_infrastructure_error());
        assert!(engine.toggle_favorite(&tower).await.is_err());
    }

    /// Yields between the read and write halves of every caller so
    /// unserialized read-modify-writes would interleave.
    struct YieldingStore(MemoryStore);

    #[async_trait]
    impl KeyValueStore for YieldingStore {
        async fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
            let value = self.0.get_item(key).await;
            tokio::task::yield_now().await;
            value
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
            self.0.set_item(key, value).await
        }

        async fn remove_item(&self, key: &str) -> Result<(), Error> {
            self.0.remove_item(key).await
        }
    }

    #[tokio::test]
    async fn overlapping_toggles_keep_both_updates() {
        let engine = Engine::new(
            Arc::new(YieldingStore(MemoryStore::new())),
            Catalog::calgary(),
            Arc::new(TracingShareSheet),
        );
        let park = place(&engine, "Bowness Park");
        let tower = place(&engine, "Calgary Tower");

        let (a, b) = futures::join!(engine.toggle_favorite(&park), engine.toggle_favorite(&tower));
        assert_eq!(a.unwrap(), SaveState::Saved);
        assert_eq!(b.unwrap(), SaveState::Saved);

        assert_eq!(engine.load_favorites().await.unwrap().len(), 2);
    }
}
