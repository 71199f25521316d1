use crate::api::{DynAPI, FavoritesAPI, ShareAPI};
use crate::entities::Place;
use crate::error::absorb;
use crate::viewport::DetailMap;

pub struct DetailsScreen {
    api: DynAPI,
    place: Place,
    saved: bool,
    map: DetailMap,
}

impl DetailsScreen {
    pub fn new(api: DynAPI, place: Place) -> Self {
        let map = DetailMap::new(&place);

        Self {
            api,
            place,
            saved: false,
            map,
        }
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub async fn on_focus(&mut self) {
        self.saved = absorb(self.api.is_saved(&self.place.title).await, "read favorite")
            .unwrap_or(false);
    }

    /// Flips the bookmark. The icon only changes once storage accepted the
    /// write.
    #[tracing::instrument(skip(self), fields(title = %self.place.title))]
    pub async fn toggle_save(&mut self) {
        if let Some(state) = absorb(self.api.toggle_favorite(&self.place).await, "toggle favorite") {
            self.saved = state.is_saved();
        }
    }

    pub async fn share(&self) {
        absorb(self.api.share_place(&self.place).await, "share place");
    }

    pub fn map(&self) -> &DetailMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut DetailMap {
        &mut self.map
    }
}
