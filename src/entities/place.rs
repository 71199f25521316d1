use serde::{Deserialize, Serialize};

use crate::entities::{Category, Coordinates};
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub title: String,
    pub coords: String,
    pub image: String,
    pub description: String,
    pub category: Category,
}

impl Place {
    pub fn new(
        title: &str,
        coords: &str,
        image: &str,
        description: &str,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            coords: coords.into(),
            image: image.into(),
            description: description.into(),
            category,
        }
    }

    pub fn coordinates(&self) -> Result<Coordinates, Error> {
        Coordinates::parse(&self.coords)
    }

    pub fn share_message(&self) -> String {
        format!("{}\n{}", self.title, self.coords)
    }
}
