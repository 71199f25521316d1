use std::time::Duration;

use crate::entities::{Coordinates, Place, Region};

use super::CameraCommand;

const DETAIL_SPAN: f64 = 0.045;
const MIN_DELTA: f64 = 0.002;
const ZOOM_IN_FACTOR: f64 = 0.6;
const ZOOM_OUT_FACTOR: f64 = 1.6;
const ZOOM_DURATION: Duration = Duration::from_millis(220);

/// Downtown, used when a place's coordinate text has no `lat, lng` pair.
pub const DETAIL_FALLBACK: Coordinates = Coordinates {
    latitude: 51.0486,
    longitude: -114.0708,
};

#[derive(Clone, Debug, PartialEq)]
pub struct DetailMap {
    initial: Region,
    region: Region,
    visible: bool,
}

impl DetailMap {
    pub fn new(place: &Place) -> Self {
        let center = Coordinates::parse_pair_or(&place.coords, DETAIL_FALLBACK);
        let initial = Region::around(center, DETAIL_SPAN);

        Self {
            initial,
            region: initial,
            visible: true,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn zoom_in(&mut self) -> CameraCommand {
        self.scale(ZOOM_IN_FACTOR)
    }

    pub fn zoom_out(&mut self) -> CameraCommand {
        self.scale(ZOOM_OUT_FACTOR)
    }

    pub fn reset(&mut self) -> CameraCommand {
        self.region = self.initial;
        self.animate()
    }

    fn scale(&mut self, factor: f64) -> CameraCommand {
        self.region = Region {
            latitude_delta: (self.region.latitude_delta * factor).max(MIN_DELTA),
            longitude_delta: (self.region.longitude_delta * factor).max(MIN_DELTA),
            ..self.region
        };
        self.animate()
    }

    fn animate(&self) -> CameraCommand {
        CameraCommand::AnimateTo {
            region: self.region,
            duration: ZOOM_DURATION,
        }
    }
}
