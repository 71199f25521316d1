use crate::api::{DynAPI, FavoritesAPI, SavedPlacesAPI, ShareAPI};
use crate::catalog::filter_by_category;
use crate::entities::{Category, Place};
use crate::error::absorb;

pub const EMPTY_SAVED_MESSAGE: &str = "You have no saved locations for this category yet.";

pub struct SavedScreen {
    api: DynAPI,
    category: Category,
    saved: Vec<Place>,
    loaded: bool,
}

impl SavedScreen {
    pub fn new(api: DynAPI) -> Self {
        Self {
            api,
            category: Category::default(),
            saved: vec![],
            loaded: false,
        }
    }

    pub async fn on_focus(&mut self) {
        self.saved = absorb(self.api.saved_places().await, "load favorites").unwrap_or_default();
        self.loaded = true;
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn places(&self) -> Vec<Place> {
        filter_by_category(&self.saved, self.category)
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.loaded && self.places().is_empty() {
            return Some(EMPTY_SAVED_MESSAGE);
        }

        None
    }

    pub async fn unsave(&mut self, title: &str) {
        if absorb(self.api.unsave(title).await, "unsave").is_some() {
            self.saved.retain(|place| place.title != title);
        }
    }

    pub async fn share(&self, place: &Place) {
        absorb(self.api.share_place(place).await, "share place");
    }
}
