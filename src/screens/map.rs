use async_channel::{Receiver, Sender};

use crate::api::{DynAPI, API};
use crate::entities::{Category, Coordinates, Place};
use crate::viewport::{Platform, SurfaceEvent, ViewportController};

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub place: Place,
    pub coordinates: Coordinates,
}

pub struct MapScreen {
    api: DynAPI,
    category: Category,
    preview: Option<Place>,
    events: Sender<SurfaceEvent>,
}

impl MapScreen {
    pub fn new(api: DynAPI, platform: Platform) -> (Self, ViewportController, Receiver<SurfaceEvent>) {
        let (events, receiver) = async_channel::unbounded();
        let screen = Self {
            api,
            category: Category::default(),
            preview: None,
            events,
        };
        let controller = ViewportController::new(platform, screen.coordinates());

        (screen, controller, receiver)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.api
            .catalog()
            .by_category(self.category)
            .into_iter()
            .filter_map(|place| match place.coordinates() {
                Ok(coordinates) => Some(Marker { place, coordinates }),
                Err(_) => {
                    tracing::debug!(title = %place.title, "place has no map position");
                    None
                }
            })
            .collect()
    }

    fn coordinates(&self) -> Vec<Coordinates> {
        self.markers().into_iter().map(|m| m.coordinates).collect()
    }

    pub fn preview(&self) -> Option<&Place> {
        self.preview.as_ref()
    }

    pub fn dismiss_preview(&mut self) {
        self.preview = None;
    }

    #[tracing::instrument(skip(self))]
    pub async fn select_category(&mut self, category: Category) {
        self.category = category;
        self.preview = None;

        let coordinates = self.coordinates();
        self.send(SurfaceEvent::CoordinatesChanged(coordinates)).await;
    }

    /// Opens the preview card for the tapped marker and centers on it.
    /// Titles without a marker in the active category are ignored.
    #[tracing::instrument(skip(self))]
    pub async fn select_marker(&mut self, title: &str) {
        let marker = match self.markers().into_iter().find(|m| m.place.title == title) {
            Some(marker) => marker,
            None => {
                tracing::warn!("no marker with that title");
                return;
            }
        };

        self.preview = Some(marker.place);
        self.send(SurfaceEvent::MarkerSelected(marker.coordinates)).await;
    }

    async fn send(&self, event: SurfaceEvent) {
        if let Err(err) = self.events.send(event).await {
            tracing::warn!(error = %err, "map surface is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::memory_api;
    use crate::viewport::Status;

    #[test]
    fn markers_follow_the_category() {
        let (api, _, _) = memory_api();
        let (screen, controller, _rx) = MapScreen::new(api, Platform::Android);

        assert_eq!(screen.markers().len(), 3);
        assert_eq!(controller.coordinates().len(), 3);
        assert_eq!(controller.status(), Status::Uninitialized);
    }

    #[tokio::test]
    async fn category_change_emits_new_marker_set() {
        let (api, _, _) = memory_api();
        let (mut screen, _, rx) = MapScreen::new(api, Platform::Ios);

        screen.select_marker("Bowness Park").await;
        assert_eq!(screen.preview().unwrap().title, "Bowness Park");

        screen.select_category(Category::Entertainment).await;
        assert!(screen.preview().is_none());

        assert!(matches!(rx.recv().await.unwrap(), SurfaceEvent::MarkerSelected(_)));
        match rx.recv().await.unwrap() {
            SurfaceEvent::CoordinatesChanged(coordinates) => assert_eq!(coordinates.len(), 3),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn preview_can_be_dismissed() {
        let (api, _, _) = memory_api();
        let (mut screen, _, _rx) = MapScreen::new(api, Platform::Android);

        screen.select_marker("Nose Hill Park").await;
        screen.dismiss_preview();

        assert!(screen.preview().is_none());
        assert_eq!(screen.category(), Category::Nature);
    }

    #[tokio::test]
    async fn unknown_marker_is_ignored() {
        let (api, _, _) = memory_api();
        let (mut screen, _, rx) = MapScreen::new(api, Platform::Ios);

        screen.select_marker("Calgary Zoo").await;

        assert!(screen.preview().is_none());
        assert!(rx.is_empty());
    }

    #[tokio::test]
    async fn closed_surface_is_tolerated() {
        let (api, _, _) = memory_api();
        let (mut screen, _, rx) = MapScreen::new(api, Platform::Ios);
        drop(rx);

        screen.select_category(Category::Culture).await;
        assert_eq!(screen.category(), Category::Culture);
    }
}
