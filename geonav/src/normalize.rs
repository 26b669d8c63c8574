//! Reduction of angles and coordinates into their canonical ranges.
//!
//! | Quantity  | Range          |
//! |-----------|----------------|
//! | heading   | `[0, 360)`     |
//! | latitude  | `[-90, 90]`    |
//! | longitude | `(-180, 180]`  |
//!
//! Values already in range are returned unchanged, so every function here is idempotent.
//! Non-finite values produce NaN.
//!
//! Headings are [`Degrees`], like every angle in the value types. Latitudes and longitudes are
//! plain `f64` degrees, the same as [`GeoPoint::lat`](geonav_types::GeoPoint::lat) and
//! [`GeoPoint::lon`](geonav_types::GeoPoint::lon) return them, so the result of a coordinate
//! normalizer can be passed straight to [`NewGeoPoint::with_latlon`].

use geonav_types::{Degrees, NewGeoPoint, Radians};

const FULL_CIRCLE: f64 = 360.0;
const HALF_CIRCLE: f64 = 180.0;
const QUARTER_CIRCLE: f64 = 90.0;

/// Converts degrees into radians.
pub fn deg_to_rad(angle: Degrees) -> Radians {
    angle.to_radians()
}

/// Converts radians into degrees.
pub fn rad_to_deg(angle: Radians) -> Degrees {
    angle.to_degrees()
}

/// Reduces the value into `[0, 360)`, handling negative values.
fn wrap_full_circle(value: f64) -> f64 {
    ((value % FULL_CIRCLE) + FULL_CIRCLE) % FULL_CIRCLE
}

/// Maps a heading into `[0, 360)`.
///
/// ```
/// use geonav::normalize_heading;
/// use geonav_types::Degrees;
///
/// assert_eq!(normalize_heading(Degrees(-90.0)), Degrees(270.0));
/// assert_eq!(normalize_heading(Degrees(360.0)), Degrees(0.0));
/// ```
pub fn normalize_heading(heading: Degrees) -> Degrees {
    if (0.0..FULL_CIRCLE).contains(&heading.0) {
        return heading;
    }

    Degrees(wrap_full_circle(heading.0))
}

/// Maps a latitude into `[-90, 90]`.
///
/// Latitudes beyond a pole are reflected back: `100` becomes `80`, `-100` becomes `-80`, and
/// `450` (one full turn plus 90) becomes `90`.
pub fn normalize_latitude(lat: f64) -> f64 {
    fold_latitude(lat).0
}

/// Returns the normalized latitude and whether it was reflected over a pole.
fn fold_latitude(lat: f64) -> (f64, bool) {
    if (-QUARTER_CIRCLE..=QUARTER_CIRCLE).contains(&lat) {
        return (lat, false);
    }

    let wrapped = wrap_full_circle(lat);
    if wrapped <= QUARTER_CIRCLE {
        (wrapped, false)
    } else if wrapped < FULL_CIRCLE - QUARTER_CIRCLE {
        (HALF_CIRCLE - wrapped, true)
    } else {
        (wrapped - FULL_CIRCLE, false)
    }
}

/// Maps a longitude into `(-180, 180]`. Both `180` and `-180` become `180`.
pub fn normalize_longitude(lon: f64) -> f64 {
    if lon > -HALF_CIRCLE && lon <= HALF_CIRCLE {
        return lon;
    }

    let wrapped = wrap_full_circle(lon);
    if wrapped > HALF_CIRCLE {
        wrapped - FULL_CIRCLE
    } else {
        wrapped
    }
}

/// Normalizes both coordinates of the location, keeping its shape.
///
/// Going over a pole lands on the opposite meridian, so when the latitude is reflected the
/// longitude is turned by 180 degrees before it is normalized.
///
/// ```
/// use geonav::normalize_location;
/// use geonav_types::latlon;
///
/// assert_eq!(normalize_location(&latlon!(100.0, 10.0)), latlon!(80.0, -170.0));
/// ```
pub fn normalize_location<P: NewGeoPoint<f64>>(location: &P) -> P {
    let (lat, reflected) = fold_latitude(location.lat());
    let lon = if reflected {
        location.lon() + HALF_CIRCLE
    } else {
        location.lon()
    };

    location.with_latlon(lat, normalize_longitude(lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geonav_types::{latlon, GeoPoint, Location, LocationShape};

    const SAMPLES: &[f64] = &[
        -1e6, -1000.5, -721.0, -540.0, -450.0, -360.0, -270.0, -181.0, -180.0, -179.9, -100.0,
        -90.0, -89.5, -1e-12, -0.0, 0.0, 1e-12, 45.0, 90.0, 90.1, 135.0, 179.999, 180.0, 180.5,
        269.0, 270.0, 271.0, 359.9, 360.0, 450.0, 721.0, 1e6,
    ];

    #[test]
    fn heading() {
        assert_eq!(normalize_heading(Degrees(0.0)), Degrees(0.0));
        assert_eq!(normalize_heading(Degrees(359.0)), Degrees(359.0));
        assert_eq!(normalize_heading(Degrees(360.0)), Degrees(0.0));
        assert_eq!(normalize_heading(Degrees(-1.0)), Degrees(359.0));
        assert_eq!(normalize_heading(Degrees(725.0)), Degrees(5.0));
        assert_eq!(normalize_heading(Degrees(-720.0)), Degrees(0.0));

        for &h in SAMPLES {
            let normalized = normalize_heading(Degrees(h));
            assert!((0.0..360.0).contains(&normalized.0), "{h} -> {normalized}");
            assert_eq!(normalize_heading(normalized), normalized);
        }
    }

    #[test]
    fn latitude() {
        assert_eq!(normalize_latitude(45.0), 45.0);
        assert_eq!(normalize_latitude(90.0), 90.0);
        assert_eq!(normalize_latitude(-90.0), -90.0);
        assert_eq!(normalize_latitude(100.0), 80.0);
        assert_eq!(normalize_latitude(-100.0), -80.0);
        assert_eq!(normalize_latitude(180.0), 0.0);
        assert_eq!(normalize_latitude(270.0), -90.0);
        assert_eq!(normalize_latitude(450.0), 90.0);
        assert_eq!(normalize_latitude(-450.0), -90.0);
        assert_eq!(normalize_latitude(370.0), 10.0);
    }

    #[test]
    fn latitude_range_and_idempotency() {
        for &lat in SAMPLES {
            let normalized = normalize_latitude(lat);
            assert!((-90.0..=90.0).contains(&normalized), "{lat} -> {normalized}");
            assert_eq!(normalize_latitude(normalized), normalized);
        }
    }

    #[test]
    fn longitude() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(181.0), -179.0);
        assert_eq!(normalize_longitude(-181.0), 179.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
        assert_eq!(normalize_longitude(720.0), 0.0);
    }

    #[test]
    fn longitude_range_and_idempotency() {
        for &lon in SAMPLES {
            let normalized = normalize_longitude(lon);
            assert!(
                normalized > -180.0 && normalized <= 180.0,
                "{lon} -> {normalized}"
            );
            assert_eq!(normalize_longitude(normalized), normalized);
        }
    }

    #[test]
    fn non_finite_does_not_panic() {
        assert!(normalize_latitude(f64::NAN).is_nan());
        assert!(normalize_longitude(f64::INFINITY).is_nan());
        assert!(normalize_heading(Degrees(f64::NEG_INFINITY)).0.is_nan());
    }

    #[test]
    fn location_reflected_over_pole() {
        assert_eq!(normalize_location(&latlon!(10.0, 20.0)), latlon!(10.0, 20.0));
        assert_eq!(normalize_location(&latlon!(95.0, 0.0)), latlon!(85.0, 180.0));
        assert_eq!(normalize_location(&latlon!(-95.0, 90.0)), latlon!(-85.0, -90.0));
        assert_eq!(normalize_location(&latlon!(100.0, 170.0)), latlon!(80.0, -10.0));
        assert_eq!(normalize_location(&latlon!(0.0, 190.0)), latlon!(0.0, -170.0));
        // Whole turn over both poles returns to the same meridian.
        assert_eq!(normalize_location(&latlon!(370.0, 20.0)), latlon!(10.0, 20.0));
    }

    #[test]
    fn coordinates_match_location_normalization() {
        let locations = [
            latlon!(45.0, 200.0),
            latlon!(-30.0, -181.0),
            latlon!(0.0, 540.0),
            latlon!(89.0, -179.0),
        ];

        for location in locations {
            let normalized = normalize_location(&location);
            let expected = location.with_latlon(
                normalize_latitude(location.lat()),
                normalize_longitude(location.lon()),
            );
            assert_eq!(normalized, expected);
        }
    }

    #[test]
    fn location_keeps_shape() {
        let location = Location::new(100.0, 10.0, LocationShape::LonLat);
        assert_eq!(
            normalize_location(&location),
            Location::new(80.0, -170.0, LocationShape::LonLat)
        );
    }

    #[test]
    fn conversions() {
        assert_relative_eq!(
            deg_to_rad(Degrees(180.0)),
            Radians(std::f64::consts::PI),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            rad_to_deg(Radians(std::f64::consts::FRAC_PI_4)),
            Degrees(45.0),
            epsilon = 1e-12
        );
    }
}
