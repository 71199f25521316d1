use std::sync::OnceLock;

use geo_types::Coord;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{no_coordinate_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

fn number_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("number pattern"))
}

fn number_pair() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(-?[0-9]+(?:\.[0-9]+)?)\s*,\s*(-?[0-9]+(?:\.[0-9]+)?)").expect("number pair pattern")
    })
}

fn finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reads the first two numeric tokens of `input` as latitude then
    /// longitude. Anything after the second token is ignored.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut tokens = number_token().find_iter(input).map(|m| m.as_str());

        let (latitude, longitude) = match (tokens.next(), tokens.next()) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(no_coordinate_error()),
        };

        match (finite(latitude), finite(longitude)) {
            (Some(latitude), Some(longitude)) => Ok(Self::new(latitude, longitude)),
            _ => Err(no_coordinate_error()),
        }
    }

    /// Stricter `lat, lng` form used by the details screen, which centers on
    /// `fallback` when the string holds no such pair.
    pub fn parse_pair_or(input: &str, fallback: Coordinates) -> Self {
        number_pair()
            .captures(input)
            .and_then(|caps| {
                let latitude = finite(caps.get(1)?.as_str())?;
                let longitude = finite(caps.get(2)?.as_str())?;
                Some(Self::new(latitude, longitude))
            })
            .unwrap_or(fallback)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Coord {
            x: coordinates.longitude,
            y: coordinates.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}
