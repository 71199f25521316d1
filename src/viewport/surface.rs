use async_channel::Receiver;
use async_trait::async_trait;

use crate::entities::{Coordinates, SurfaceSize};
use crate::error::{absorb, Error};

use super::{CameraCommand, ViewportController};

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    SurfaceReady(SurfaceSize),
    TilesLoaded,
    CoordinatesChanged(Vec<Coordinates>),
    MarkerSelected(Coordinates),
}

#[async_trait]
pub trait MapHandle: Send {
    async fn apply(&mut self, command: CameraCommand) -> Result<(), Error>;
}

/// Feeds surface events into `controller` until the sender side closes,
/// forwarding camera moves to `handle`. Returns the controller so the
/// screen can inspect its final state.
#[tracing::instrument(skip_all)]
pub async fn drive_surface<H: MapHandle>(
    mut controller: ViewportController,
    events: Receiver<SurfaceEvent>,
    handle: &mut H,
) -> ViewportController {
    while let Ok(event) = events.recv().await {
        let command = match controller.handle(event) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(code = err.code, "surface event out of order");
                continue;
            }
        };

        absorb(handle.apply(command).await, "camera move");
    }

    controller
}
