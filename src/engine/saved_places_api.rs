use super::helpers::fetch_saved_places;
use super::Engine;

use async_trait::async_trait;

use crate::{
    api::SavedPlacesAPI, catalog::filter_by_category, entities::Category, entities::Place,
    error::Error, hydrator::hydrate,
};

#[async_trait]
impl SavedPlacesAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn saved_places(&self) -> Result<Vec<Place>, Error> {
        let saved = fetch_saved_places(self.store.as_ref()).await?;

        Ok(hydrate(self.catalog.places(), &saved))
    }

    #[tracing::instrument(skip(self))]
    async fn saved_places_in(&self, category: Category) -> Result<Vec<Place>, Error> {
        let places = self.saved_places().await?;

        Ok(filter_by_category(&places, category))
    }
}
