use geo_types::{Coord, Rect};

use crate::entities::{Coordinates, EdgePadding, Region, SurfaceSize};

pub const FIT_PADDING: EdgePadding = EdgePadding {
    top: 80.0,
    right: 36.0,
    bottom: 120.0,
    left: 36.0,
};

pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 51.0449,
    longitude: -114.0631,
};

pub const DEFAULT_SPAN: f64 = 0.25;

const MIN_FIT_SPAN: f64 = 0.01;

const NO_PADDING: EdgePadding = EdgePadding {
    top: 0.0,
    right: 0.0,
    bottom: 0.0,
    left: 0.0,
};

pub fn default_region() -> Region {
    Region::around(DEFAULT_CENTER, DEFAULT_SPAN)
}

fn bounds(coordinates: &[Coordinates]) -> Option<Rect<f64>> {
    let (first, rest) = coordinates.split_first()?;
    let first: Coord<f64> = (*first).into();

    let (min, max) = rest.iter().fold((first, first), |(min, max), c| {
        let c: Coord<f64> = (*c).into();
        (
            Coord {
                x: min.x.min(c.x),
                y: min.y.min(c.y),
            },
            Coord {
                x: max.x.max(c.x),
                y: max.y.max(c.y),
            },
        )
    });

    Some(Rect::new(min, max))
}

/// Region showing every coordinate inside the padded area of `surface`.
///
/// Pure: the same inputs always produce the same region. An empty set
/// yields [`default_region`]. Padding that does not fit the surface is
/// dropped.
pub fn fit_region(coordinates: &[Coordinates], padding: EdgePadding, surface: SurfaceSize) -> Region {
    let bounds = match bounds(coordinates) {
        Some(bounds) => bounds,
        None => return default_region(),
    };

    let center = Coordinates::from(bounds.center());
    let lat_span = bounds.height().max(MIN_FIT_SPAN);
    let lng_span = bounds.width().max(MIN_FIT_SPAN);

    if surface.width <= 0.0 || surface.height <= 0.0 {
        return Region {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: lat_span,
            longitude_delta: lng_span,
        };
    }

    let inner_width = surface.width - padding.left - padding.right;
    let inner_height = surface.height - padding.top - padding.bottom;
    let (padding, inner_width, inner_height) = if inner_width > 0.0 && inner_height > 0.0 {
        (padding, inner_width, inner_height)
    } else {
        (NO_PADDING, surface.width, surface.height)
    };

    let latitude_delta = lat_span * surface.height / inner_height;
    let longitude_delta = lng_span * surface.width / inner_width;

    // degrees per dp along each axis
    let lat_scale = latitude_delta / surface.height;
    let lng_scale = longitude_delta / surface.width;

    Region {
        latitude: center.latitude - (padding.bottom - padding.top) / 2.0 * lat_scale,
        longitude: center.longitude + (padding.right - padding.left) / 2.0 * lng_scale,
        latitude_delta,
        longitude_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: SurfaceSize = SurfaceSize {
        width: 390.0,
        height: 600.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_set_falls_back_to_default() {
        let region = fit_region(&[], FIT_PADDING, PHONE);

        assert_eq!(region.center(), Coordinates::new(51.0449, -114.0631));
        assert_eq!(region.latitude_delta, 0.25);
        assert_eq!(region.longitude_delta, 0.25);
    }

    #[test]
    fn every_coordinate_is_visible() {
        let coordinates = vec![
            Coordinates::new(51.0533, -114.0713),
            Coordinates::new(51.1061, -114.1110),
            Coordinates::new(51.0837, -114.2158),
        ];

        let region = fit_region(&coordinates, FIT_PADDING, PHONE);

        for c in coordinates {
            assert!(region.contains(c), "{:?} outside {:?}", c, region);
        }
    }

    #[test]
    fn padding_maps_box_edges_to_insets() {
        let coordinates = vec![Coordinates::new(51.0, -114.2), Coordinates::new(51.2, -114.0)];

        let region = fit_region(&coordinates, FIT_PADDING, PHONE);

        let lat_scale = region.latitude_delta / PHONE.height;
        let top_edge_dp = PHONE.height / 2.0 - (51.2 - region.latitude) / lat_scale;
        let bottom_edge_dp = PHONE.height / 2.0 + (region.latitude - 51.0) / lat_scale;
        assert!(close(top_edge_dp, 80.0));
        assert!(close(PHONE.height - bottom_edge_dp, 120.0));

        let lng_scale = region.longitude_delta / PHONE.width;
        let left_edge_dp = PHONE.width / 2.0 - (region.longitude + 114.2) / lng_scale;
        assert!(close(left_edge_dp, 36.0));
    }

    #[test]
    fn reframing_is_idempotent() {
        let coordinates = vec![Coordinates::new(51.04, -114.05), Coordinates::new(51.03, -114.06)];

        assert_eq!(
            fit_region(&coordinates, FIT_PADDING, PHONE),
            fit_region(&coordinates, FIT_PADDING, PHONE)
        );
    }

    #[test]
    fn single_point_gets_minimum_span() {
        let tower = Coordinates::new(51.0449, -114.0631);

        let region = fit_region(&[tower], FIT_PADDING, PHONE);

        assert!(region.latitude_delta >= MIN_FIT_SPAN);
        assert!(region.longitude_delta >= MIN_FIT_SPAN);
        assert!(region.contains(tower));
    }

    #[test]
    fn tiny_surface_ignores_padding() {
        let coordinates = vec![Coordinates::new(51.0, -114.2), Coordinates::new(51.2, -114.0)];

        let region = fit_region(&coordinates, FIT_PADDING, SurfaceSize::new(60.0, 150.0));

        assert!(close(region.latitude, 51.1));
        assert!(close(region.longitude, -114.1));
        assert!(close(region.latitude_delta, 0.2));
    }
}
