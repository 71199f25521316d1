mod category;
mod location;
mod place;
mod region;
mod saved_place;

pub use category::Category;
pub use location::Coordinates;
pub use place::Place;
pub use region::{EdgePadding, Region, SurfaceSize};
pub use saved_place::{SaveState, SavedPlace};
