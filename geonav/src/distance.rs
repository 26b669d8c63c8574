//! Distances and headings between locations on a sphere.

use crate::normalize::{
    deg_to_rad, normalize_heading, normalize_location, normalize_longitude, rad_to_deg,
};
use crate::sphere::Sphere;
use geonav_types::{Degrees, GeoPoint, HeadingDistance, Meters, NewGeoPoint, Radians};
use log::debug;

/// Cosine of latitude below which a location is considered to be at a pole.
pub(crate) const POLE_COS_EPSILON: f64 = 1e-12;

/// Latitudes of both points and the longitude difference between them, all in radians.
///
/// The longitude difference is normalized, so that the same meridian given as `180` and `-180`
/// has zero difference.
fn radian_coords(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> (f64, f64, f64) {
    let phi1 = deg_to_rad(Degrees(a.lat())).0;
    let phi2 = deg_to_rad(Degrees(b.lat())).0;
    let d_lambda = deg_to_rad(Degrees(normalize_longitude(b.lon() - a.lon()))).0;
    (phi1, phi2, d_lambda)
}

/// Angle between two points as seen from the center of the sphere (haversine formula).
///
/// The `atan2` form stays accurate for both very close and nearly antipodal points.
fn central_angle(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> Radians {
    let (phi1, phi2, d_lambda) = radian_coords(a, b);
    let h = ((phi2 - phi1) / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    Radians(2.0 * h.sqrt().atan2((1.0 - h).sqrt()))
}

impl Sphere {
    /// Great-circle distance between two points.
    pub fn distance(&self, a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> Meters {
        self.arc_length(central_angle(a, b))
    }

    /// Initial heading and distance from `a` to `b`.
    ///
    /// Same as calling [`heading_to`] and [`Sphere::distance`].
    pub fn heading_distance(
        &self,
        a: &impl GeoPoint<Num = f64>,
        b: &impl GeoPoint<Num = f64>,
    ) -> HeadingDistance {
        HeadingDistance::new(heading_to(a, b), self.distance(a, b))
    }

    /// Location reached by going from `from` in the given direction for the given distance.
    ///
    /// This is an equirectangular approximation: the path is treated as a straight line on a
    /// plane, with longitudes scaled by the cosine of the starting latitude. It is accurate for
    /// short distances away from the poles, and the error grows with the distance. Negative
    /// distances move in the opposite direction.
    ///
    /// At a pole any movement to the east or west cannot be expressed in longitude, so only
    /// the north-south part of the movement is applied.
    ///
    /// The result is normalized and has the same shape as `from`.
    pub fn move_to<P: NewGeoPoint<f64>>(&self, from: &P, heading_distance: HeadingDistance) -> P {
        let bearing = deg_to_rad(heading_distance.heading);
        let angle = self.central_angle(heading_distance.distance).0;
        let d_north = angle * bearing.cos();
        let d_east = angle * bearing.sin();

        let cos_lat = deg_to_rad(Degrees(from.lat())).cos();
        let d_lon = if cos_lat.abs() < POLE_COS_EPSILON {
            debug!(
                "Moving from a pole ({}, {}), longitude change is ignored",
                from.lat(),
                from.lon()
            );
            0.0
        } else {
            d_east / cos_lat
        };

        let lat = from.lat() + rad_to_deg(Radians(d_north)).0;
        let lon = from.lon() + rad_to_deg(Radians(d_lon)).0;

        normalize_location(&from.with_latlon(lat, lon))
    }

    /// Total length of the path going through all the points in order.
    ///
    /// Returns zero for paths with less than two points.
    pub fn path_length<P: GeoPoint<Num = f64>>(&self, path: &[P]) -> Meters {
        path.windows(2)
            .map(|pair| self.distance(&pair[0], &pair[1]))
            .fold(Meters(0.0), |acc, d| acc + d)
    }
}

/// Great-circle distance between two points on the earth.
///
/// ```
/// use geonav::distance_to;
/// use geonav_types::latlon;
///
/// let d = distance_to(&latlon!(0.0, 0.0), &latlon!(0.0, 1.0));
/// assert!((d.value() - 111_195.0).abs() < 50.0);
/// ```
pub fn distance_to(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> Meters {
    Sphere::EARTH.distance(a, b)
}

/// Initial heading (forward azimuth) of the great circle from `a` to `b`, in `[0, 360)`.
///
/// If the points coincide there is no direction, and `0` is returned.
pub fn heading_to(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> Degrees {
    let (phi1, phi2, d_lambda) = radian_coords(a, b);
    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    if y == 0.0 && x == 0.0 {
        debug!(
            "Heading between coincident points ({}, {}) defaults to 0",
            a.lat(),
            a.lon()
        );
        return Degrees(0.0);
    }

    normalize_heading(rad_to_deg(Radians(y.atan2(x))))
}

/// Initial heading and distance from `a` to `b` on the earth.
pub fn heading_distance_to(
    a: &impl GeoPoint<Num = f64>,
    b: &impl GeoPoint<Num = f64>,
) -> HeadingDistance {
    Sphere::EARTH.heading_distance(a, b)
}

/// Location reached by going from `from` with the given heading and distance on the earth.
///
/// See [`Sphere::move_to`] for the approximation used.
pub fn move_to<P: NewGeoPoint<f64>>(from: &P, heading_distance: HeadingDistance) -> P {
    Sphere::EARTH.move_to(from, heading_distance)
}

/// Total length of the path on the earth.
pub fn path_length<P: GeoPoint<Num = f64>>(path: &[P]) -> Meters {
    Sphere::EARTH.path_length(path)
}
