use crate::{
    db::KeyValueStore,
    entities::SavedPlace,
    error::{corrupt_blob_error, Error},
};

use super::SAVED_PLACES_KEY;

#[tracing::instrument(skip(store))]
pub async fn fetch_saved_places(store: &dyn KeyValueStore) -> Result<Vec<SavedPlace>, Error> {
    let maybe_blob = store.get_item(SAVED_PLACES_KEY).await?;

    let blob = match maybe_blob {
        Some(blob) => blob,
        None => return Ok(vec![]),
    };

    serde_json::from_str(&blob).map_err(|err| {
        tracing::warn!(%err, "favorites blob does not parse");
        corrupt_blob_error()
    })
}

#[tracing::instrument(skip(store, saved), fields(count = saved.len()))]
pub async fn update_saved_places(
    store: &dyn KeyValueStore,
    saved: &[SavedPlace],
) -> Result<(), Error> {
    let blob = serde_json::to_string(saved)?;
    store.set_item(SAVED_PLACES_KEY, &blob).await
}
