use async_trait::async_trait;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::entities::{Category, Place, SaveState, SavedPlace};
use crate::error::Error;

#[async_trait]
pub trait FavoritesAPI {
    async fn load_favorites(&self) -> Result<Vec<SavedPlace>, Error>;
    async fn is_saved(&self, title: &str) -> Result<bool, Error>;
    async fn toggle_favorite(&self, place: &Place) -> Result<SaveState, Error>;
    async fn unsave(&self, title: &str) -> Result<(), Error>;
}

#[async_trait]
pub trait SavedPlacesAPI {
    async fn saved_places(&self) -> Result<Vec<Place>, Error>;
    async fn saved_places_in(&self, category: Category) -> Result<Vec<Place>, Error>;
}

#[async_trait]
pub trait ShareAPI {
    async fn share_place(&self, place: &Place) -> Result<(), Error>;
    async fn share_fact(&self, fact: &str) -> Result<(), Error>;
    async fn share_app(&self) -> Result<(), Error>;
}

pub trait API: FavoritesAPI + SavedPlacesAPI + ShareAPI {
    fn catalog(&self) -> &Catalog;
}

pub type DynAPI = Arc<dyn API + Send + Sync>;
