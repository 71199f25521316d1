use crate::entities::{Coordinates, Region, SurfaceSize};
use crate::error::{invalid_invocation_error, Error};

use super::framing::{fit_region, FIT_PADDING};
use super::{CameraCommand, Platform, SurfaceEvent, FOCUS_DURATION, FOCUS_SPAN};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Status {
    Uninitialized,
    SurfaceReady,
    TilesReady,
    Framed { region: Region },
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Uninitialized => "uninitialized".into(),
            Self::SurfaceReady => "surface_ready".into(),
            Self::TilesReady => "tiles_ready".into(),
            Self::Framed { region: _ } => "framed".into(),
        }
    }
}

/// Per-screen camera state for the interactive map.
///
/// The first fit waits until the surface exists and its tiles are loaded.
/// After that every change of the marker set reframes immediately.
#[derive(Clone, Debug)]
pub struct ViewportController {
    platform: Platform,
    status: Status,
    surface: Option<SurfaceSize>,
    // tiles can report before the surface on some devices
    tiles_loaded: bool,
    coordinates: Vec<Coordinates>,
}

impl ViewportController {
    pub fn new(platform: Platform, coordinates: Vec<Coordinates>) -> Self {
        Self {
            platform,
            status: Status::Uninitialized,
            surface: None,
            tiles_loaded: false,
            coordinates,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn coordinates(&self) -> &[Coordinates] {
        &self.coordinates
    }

    pub fn region(&self) -> Option<Region> {
        match self.status {
            Status::Framed { region } => Some(region),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        match self.status {
            Status::TilesReady | Status::Framed { region: _ } => true,
            _ => false,
        }
    }

    pub fn handle(&mut self, event: SurfaceEvent) -> Result<Option<CameraCommand>, Error> {
        match event {
            SurfaceEvent::SurfaceReady(size) => self.surface_ready(size),
            SurfaceEvent::TilesLoaded => self.tiles_loaded(),
            SurfaceEvent::CoordinatesChanged(coordinates) => Ok(self.set_coordinates(coordinates)),
            SurfaceEvent::MarkerSelected(coordinates) => Ok(Some(self.focus(coordinates))),
        }
    }

    #[tracing::instrument(skip(self), fields(status = %self.status.name()))]
    pub fn surface_ready(&mut self, size: SurfaceSize) -> Result<Option<CameraCommand>, Error> {
        match self.status {
            Status::Uninitialized => {
                self.surface = Some(size);
                self.status = Status::SurfaceReady;

                if self.platform.ready_implies_tiles() || self.tiles_loaded {
                    return Ok(Some(self.promote()));
                }

                Ok(None)
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self), fields(status = %self.status.name()))]
    pub fn tiles_loaded(&mut self) -> Result<Option<CameraCommand>, Error> {
        self.tiles_loaded = true;

        match self.status {
            Status::SurfaceReady => Ok(Some(self.promote())),
            // recorded for when the surface arrives, or a repeat after panning
            _ => Ok(None),
        }
    }

    /// Replaces the marker set, reframing right away once the map is ready.
    pub fn set_coordinates(&mut self, coordinates: Vec<Coordinates>) -> Option<CameraCommand> {
        self.coordinates = coordinates;

        if self.is_ready() {
            return Some(self.frame());
        }

        None
    }

    /// Centers on one marker at a close zoom. Leaves the marker set and the
    /// framing state untouched.
    pub fn focus(&self, coordinates: Coordinates) -> CameraCommand {
        CameraCommand::AnimateTo {
            region: Region::around(coordinates, FOCUS_SPAN),
            duration: FOCUS_DURATION,
        }
    }

    fn promote(&mut self) -> CameraCommand {
        self.status = Status::TilesReady;
        self.frame()
    }

    fn frame(&mut self) -> CameraCommand {
        let surface = self.surface.unwrap_or(SurfaceSize::new(0.0, 0.0));
        let region = fit_region(&self.coordinates, FIT_PADDING, surface);

        self.status = Status::Framed { region };
        tracing::debug!(?region, markers = self.coordinates.len(), "viewport framed");

        CameraCommand::Fit { region }
    }
}
