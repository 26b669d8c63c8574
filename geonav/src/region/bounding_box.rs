use crate::distance::POLE_COS_EPSILON;
use crate::error::GeonavError;
use crate::normalize::{deg_to_rad, rad_to_deg};
use crate::sphere::Sphere;
use geonav_types::{BoundingBox, Degrees, Extent, GeoPoint, Meters, NewGeoPoint};
use log::debug;

impl Sphere {
    /// Smallest box containing all `locations`, expanded by `margin` on every side.
    ///
    /// The result has `top_left` at the maximum latitude and minimum longitude, and
    /// `bottom_right` at the minimum latitude and maximum longitude. Both corners are in the
    /// shape of the first location.
    ///
    /// The margin is converted into degrees at the edge of the box farthest from the equator,
    /// where a meter covers the most longitude. Latitudes of the expanded box are limited to
    /// `[-90, 90]` and longitudes to `[-180, 180]`. If the expansion in longitude would reach
    /// around the whole earth, the box covers all longitudes.
    ///
    /// Fails with [`GeonavError::InvalidInput`] if `locations` is empty.
    pub fn bounding_box<P: NewGeoPoint<f64>>(
        &self,
        locations: &[P],
        margin: Meters,
    ) -> Result<BoundingBox<P>, GeonavError> {
        let (Some(first), Some(extent)) = (locations.first(), Extent::from_points(locations.iter()))
        else {
            return Err(GeonavError::InvalidInput(
                "bounding box of an empty list of locations".into(),
            ));
        };

        let extent = if margin == Meters(0.0) {
            extent
        } else {
            self.expand(extent, margin)
        };

        Ok(BoundingBox::new(
            first.with_latlon(extent.max_lat, extent.min_lon),
            first.with_latlon(extent.min_lat, extent.max_lon),
        ))
    }

    fn expand(&self, extent: Extent, margin: Meters) -> Extent {
        let d_lat = rad_to_deg(self.central_angle(margin)).0;

        let edge_lat = extent.min_lat.abs().max(extent.max_lat.abs()).min(90.0);
        let cos_lat = deg_to_rad(Degrees(edge_lat)).cos();
        let d_lon = d_lat / cos_lat;

        let (min_lon, max_lon) = if cos_lat < POLE_COS_EPSILON || d_lon >= 180.0 {
            debug!("Margin of {margin} covers all longitudes at latitude {edge_lat}");
            (-180.0, 180.0)
        } else {
            (
                (extent.min_lon - d_lon).max(-180.0),
                (extent.max_lon + d_lon).min(180.0),
            )
        };

        Extent {
            min_lat: (extent.min_lat - d_lat).max(-90.0),
            max_lat: (extent.max_lat + d_lat).min(90.0),
            min_lon,
            max_lon,
        }
    }
}

/// Smallest box containing all `locations`, expanded by `margin` on the earth.
///
/// See [`Sphere::bounding_box`] for details.
///
/// ```
/// use geonav::bounding_box;
/// use geonav_types::{latlon, Meters};
///
/// let bbox = bounding_box(&[latlon!(0.0, 0.0), latlon!(10.0, 10.0)], Meters(0.0)).unwrap();
/// assert_eq!(bbox.top_left, latlon!(10.0, 0.0));
/// assert_eq!(bbox.bottom_right, latlon!(0.0, 10.0));
/// ```
pub fn bounding_box<P: NewGeoPoint<f64>>(
    locations: &[P],
    margin: Meters,
) -> Result<BoundingBox<P>, GeonavError> {
    Sphere::EARTH.bounding_box(locations, margin)
}

/// Whether `location` lies inside the box or on its border.
///
/// The corners can be given in any order. Boxes crossing the antimeridian (with the western
/// corner having larger longitude than the eastern one) are not supported.
pub fn inside_bounding_box<P: GeoPoint<Num = f64>>(
    location: &impl GeoPoint<Num = f64>,
    bbox: &BoundingBox<P>,
) -> bool {
    bbox.extent().contains(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::distance_to;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geonav_types::{latlon, LatLon, Location, LocationShape};

    #[test]
    fn box_of_two_points() {
        let bbox = bounding_box(&[latlon!(0.0, 0.0), latlon!(10.0, 10.0)], Meters(0.0)).unwrap();
        assert_eq!(bbox.top_left, latlon!(10.0, 0.0));
        assert_eq!(bbox.bottom_right, latlon!(0.0, 10.0));
    }

    #[test]
    fn box_of_one_point() {
        let bbox = bounding_box(&[latlon!(5.0, -5.0)], Meters(0.0)).unwrap();
        assert_eq!(bbox.top_left, latlon!(5.0, -5.0));
        assert_eq!(bbox.bottom_right, latlon!(5.0, -5.0));
    }

    #[test]
    fn box_of_many_points() {
        let points = [
            latlon!(3.0, 7.0),
            latlon!(-2.0, 1.0),
            latlon!(8.0, -4.0),
            latlon!(0.0, 0.0),
        ];
        let bbox = bounding_box(&points, Meters(0.0)).unwrap();
        assert_eq!(bbox.top_left, latlon!(8.0, -4.0));
        assert_eq!(bbox.bottom_right, latlon!(-2.0, 7.0));
        for p in &points {
            assert!(inside_bounding_box(p, &bbox));
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_matches!(
            bounding_box::<LatLon>(&[], Meters(0.0)),
            Err(GeonavError::InvalidInput(_))
        );
        assert_matches!(
            bounding_box::<LatLon>(&[], Meters(100.0)),
            Err(GeonavError::InvalidInput(_))
        );
    }

    #[test]
    fn margin_expands_all_sides() {
        let bbox = bounding_box(&[latlon!(0.0, 0.0), latlon!(0.0, 0.0)], Meters(1000.0)).unwrap();

        let north = latlon!(bbox.top_left.lat, 0.0);
        let west = latlon!(0.0, bbox.top_left.lon);
        let south = latlon!(bbox.bottom_right.lat, 0.0);
        let east = latlon!(0.0, bbox.bottom_right.lon);
        for side in [north, west, south, east] {
            assert_abs_diff_eq!(
                distance_to(&latlon!(0.0, 0.0), &side),
                Meters(1000.0),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn margin_uses_farthest_latitude() {
        let bbox = bounding_box(&[latlon!(50.0, 10.0), latlon!(60.0, 20.0)], Meters(10_000.0))
            .unwrap();

        // At the northern edge the margin still covers 10 km of longitude.
        let edge_lat = 60.0;
        let west = distance_to(&latlon!(edge_lat, 10.0), &latlon!(edge_lat, bbox.top_left.lon));
        assert!(west.0 >= 9_999.0, "{west}");
        assert!(bbox.top_left.lat > 60.0);
        assert!(bbox.bottom_right.lat < 50.0);
    }

    #[test]
    fn margin_near_pole_covers_all_longitudes() {
        let bbox = bounding_box(&[latlon!(89.99, 10.0)], Meters(50_000.0)).unwrap();
        assert_eq!(bbox.top_left, latlon!(90.0, -180.0));
        assert_eq!(bbox.bottom_right.lon, 180.0);
        assert!(bbox.bottom_right.lat < 89.99);
    }

    #[test]
    fn margin_is_clamped_at_antimeridian() {
        let bbox = bounding_box(&[latlon!(0.0, 179.999)], Meters(1000.0)).unwrap();
        assert_eq!(bbox.bottom_right.lon, 180.0);
    }

    #[test]
    fn corners_keep_shape_of_first_location() {
        let points = [
            Location::new(1.0, 2.0, LocationShape::LonLat),
            Location::new(3.0, 4.0, LocationShape::LatLng),
        ];
        let bbox = bounding_box(&points, Meters(0.0)).unwrap();
        assert_eq!(bbox.top_left, Location::new(3.0, 2.0, LocationShape::LonLat));
        assert_eq!(
            bbox.bottom_right,
            Location::new(1.0, 4.0, LocationShape::LonLat)
        );
    }

    #[test]
    fn inside_box_includes_edges() {
        let bbox = BoundingBox::new(latlon!(10.0, 0.0), latlon!(0.0, 10.0));
        assert!(inside_bounding_box(&latlon!(5.0, 5.0), &bbox));
        assert!(inside_bounding_box(&latlon!(10.0, 0.0), &bbox));
        assert!(inside_bounding_box(&latlon!(0.0, 5.0), &bbox));
        assert!(inside_bounding_box(&latlon!(5.0, 10.0), &bbox));
        assert!(!inside_bounding_box(&latlon!(10.1, 5.0), &bbox));
        assert!(!inside_bounding_box(&latlon!(5.0, -0.1), &bbox));
    }

    #[test]
    fn inside_box_ignores_corner_order() {
        let corners = [latlon!(10.0, 0.0), latlon!(0.0, 10.0)];
        let other_diagonal = [latlon!(0.0, 0.0), latlon!(10.0, 10.0)];
        let points = [
            latlon!(5.0, 5.0),
            latlon!(0.0, 0.0),
            latlon!(-1.0, 5.0),
            latlon!(5.0, 11.0),
        ];

        for [a, b] in [corners, other_diagonal] {
            let straight = BoundingBox::new(a, b);
            let swapped = BoundingBox::new(b, a);
            for p in &points {
                assert_eq!(
                    inside_bounding_box(p, &straight),
                    inside_bounding_box(p, &swapped),
                    "{p:?}"
                );
            }
        }
    }

    #[test]
    fn antimeridian_box_is_not_corrected() {
        // A box meant to span from 170 to -170 through the antimeridian is treated as the box
        // from -170 to 170 through 0.
        let bbox = BoundingBox::new(latlon!(10.0, 170.0), latlon!(-10.0, -170.0));
        assert!(!inside_bounding_box(&latlon!(0.0, 180.0), &bbox));
        assert!(inside_bounding_box(&latlon!(0.0, 0.0), &bbox));
    }
}
