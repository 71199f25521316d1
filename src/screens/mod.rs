//! Headless view-models behind each screen. They hold the screen's local
//! state and route every best-effort failure through [`absorb`].
//!
//! [`absorb`]: crate::error::absorb

mod about;
mod details;
mod map;
mod recommended;
mod saved;

pub use about::AboutScreen;
pub use details::DetailsScreen;
pub use map::MapScreen;
pub use recommended::RecommendedScreen;
pub use saved::{SavedScreen, EMPTY_SAVED_MESSAGE};
