use serde::{Deserialize, Serialize};

use crate::entities::Place;

/// Persisted favorite. `coords` is copied at save time, not re-derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedPlace {
    pub title: String,
    pub coords: String,
}

impl From<&Place> for SavedPlace {
    fn from(place: &Place) -> Self {
        Self {
            title: place.title.clone(),
            coords: place.coords.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Saved,
    Unsaved,
}

impl SaveState {
    pub fn is_saved(&self) -> bool {
        match self {
            Self::Saved => true,
            Self::Unsaved => false,
        }
    }
}
