mod controller;
mod detail_map;
mod framing;
mod surface;

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entities::Region;
use crate::error::{config_error, Error};

pub use controller::{Status, ViewportController};
pub use detail_map::DetailMap;
pub use framing::{default_region, fit_region, DEFAULT_CENTER, DEFAULT_SPAN, FIT_PADDING};
pub use surface::{drive_surface, MapHandle, SurfaceEvent};

pub const FOCUS_SPAN: f64 = 0.08;
pub const FOCUS_DURATION: Duration = Duration::from_millis(450);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// On iOS the ready callback already implies loaded tiles.
    pub fn ready_implies_tiles(&self) -> bool {
        match self {
            Self::Ios => true,
            Self::Android => false,
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            _ => Err(config_error()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    Fit { region: Region },
    AnimateTo { region: Region, duration: Duration },
}

impl CameraCommand {
    pub fn region(&self) -> Region {
        match self {
            Self::Fit { region } => *region,
            Self::AnimateTo { region, duration: _ } => *region,
        }
    }
}

#[test]
fn parses_platform_names() {
    assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
    assert_eq!(" android ".parse::<Platform>().unwrap(), Platform::Android);
    assert!("web".parse::<Platform>().is_err());
}
