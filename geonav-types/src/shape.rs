//! Four interchangeable representations of a coordinate pair.
//!
//! Different data sources spell a location differently. This module supports the common
//! conventions, each as a small struct that serializes exactly the way the convention looks:
//!
//! | Type                  | Serialized form                          |
//! |-----------------------|------------------------------------------|
//! | [`LatLon`]            | `{"lat": 52.5, "lon": 13.4}`             |
//! | [`LatLng`]            | `{"lat": 52.5, "lng": 13.4}`             |
//! | [`LatitudeLongitude`] | `{"latitude": 52.5, "longitude": 13.4}`  |
//! | [`LonLat`]            | `[13.4, 52.5]` (longitude first)         |
//!
//! [`Location`] can hold any of them. When deserialized it recognizes the shape of the input,
//! and algorithms that build new locations from a `Location` keep the shape of their input.

use crate::error::GeonavTypesError;
use crate::point::{GeoPoint, NewGeoPoint};
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// Tag of a location representation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationShape {
    /// See [`LatLon`].
    #[default]
    LatLon,
    /// See [`LatLng`].
    LatLng,
    /// See [`LatitudeLongitude`].
    LatitudeLongitude,
    /// See [`LonLat`].
    LonLat,
}

/// Location with `lat` and `lon` fields.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Location with `lat` and `lng` fields.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Location with `latitude` and `longitude` fields.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LatitudeLongitude {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Location as a two-element array, longitude first (GeoJSON order).
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LonLat(pub [f64; 2]);

impl LatLon {
    /// Creates a new location.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl LatLng {
    /// Creates a new location.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl LatitudeLongitude {
    /// Creates a new location.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl LonLat {
    /// Creates a new location. Note the argument order.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self([lon, lat])
    }
}

macro_rules! impl_geo_point {
    ($name:ident, |$p:ident| $lat:expr, $lon:expr, |$new_lat:ident, $new_lon:ident| $ctor:expr) => {
        impl GeoPoint for $name {
            type Num = f64;

            fn lat(&self) -> f64 {
                let $p = self;
                $lat
            }

            fn lon(&self) -> f64 {
                let $p = self;
                $lon
            }
        }

        impl NewGeoPoint<f64> for $name {
            fn latlon($new_lat: f64, $new_lon: f64) -> Self {
                $ctor
            }
        }
    };
}

impl_geo_point!(LatLon, |p| p.lat, p.lon, |lat, lon| LatLon::new(lat, lon));
impl_geo_point!(LatLng, |p| p.lat, p.lng, |lat, lon| LatLng::new(lat, lon));
impl_geo_point!(
    LatitudeLongitude,
    |p| p.latitude,
    p.longitude,
    |lat, lon| LatitudeLongitude::new(lat, lon)
);
impl_geo_point!(LonLat, |p| p.0[1], p.0[0], |lat, lon| LonLat::new(lon, lat));

impl TryFrom<&[f64]> for LonLat {
    type Error = GeonavTypesError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [lon, lat] => Ok(LonLat::new(*lon, *lat)),
            _ => Err(GeonavTypesError::Conversion(format!(
                "expected [longitude, latitude], got {} values",
                value.len()
            ))),
        }
    }
}

/// A location in any of the supported shapes.
///
/// ```
/// use geonav_types::{GeoPoint, Location, LocationShape};
///
/// let location: Location = serde_json::from_str(r#"{"latitude": 10.0, "longitude": 20.0}"#).unwrap();
/// assert_eq!(location.shape(), LocationShape::LatitudeLongitude);
/// assert_eq!(location.lat(), 10.0);
///
/// let as_array = location.to_shape(LocationShape::LonLat);
/// assert_eq!(serde_json::to_string(&as_array).unwrap(), "[20.0,10.0]");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    // Must be tried first: the struct shapes would also accept a two-element sequence.
    /// `[lon, lat]`
    LonLat(LonLat),
    /// `{"lat", "lon"}`
    LatLon(LatLon),
    /// `{"lat", "lng"}`
    LatLng(LatLng),
    /// `{"latitude", "longitude"}`
    LatitudeLongitude(LatitudeLongitude),
}

impl Location {
    /// Creates a location of the given shape.
    pub fn new(lat: f64, lon: f64, shape: LocationShape) -> Self {
        match shape {
            LocationShape::LatLon => Self::LatLon(LatLon::new(lat, lon)),
            LocationShape::LatLng => Self::LatLng(LatLng::new(lat, lon)),
            LocationShape::LatitudeLongitude => {
                Self::LatitudeLongitude(LatitudeLongitude::new(lat, lon))
            }
            LocationShape::LonLat => Self::LonLat(LonLat::new(lon, lat)),
        }
    }

    /// Shape of the location.
    pub fn shape(&self) -> LocationShape {
        match self {
            Self::LatLon(_) => LocationShape::LatLon,
            Self::LatLng(_) => LocationShape::LatLng,
            Self::LatitudeLongitude(_) => LocationShape::LatitudeLongitude,
            Self::LonLat(_) => LocationShape::LonLat,
        }
    }

    /// Same coordinates in a different shape.
    pub fn to_shape(&self, shape: LocationShape) -> Self {
        Self::new(self.lat(), self.lon(), shape)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::LatLon(LatLon::default())
    }
}

impl GeoPoint for Location {
    type Num = f64;

    fn lat(&self) -> f64 {
        match self {
            Self::LatLon(p) => p.lat(),
            Self::LatLng(p) => p.lat(),
            Self::LatitudeLongitude(p) => p.lat(),
            Self::LonLat(p) => p.lat(),
        }
    }

    fn lon(&self) -> f64 {
        match self {
            Self::LatLon(p) => p.lon(),
            Self::LatLng(p) => p.lon(),
            Self::LatitudeLongitude(p) => p.lon(),
            Self::LonLat(p) => p.lon(),
        }
    }
}

impl NewGeoPoint<f64> for Location {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, LocationShape::default())
    }

    fn with_latlon(&self, lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, self.shape())
    }
}

impl From<LatLon> for Location {
    fn from(value: LatLon) -> Self {
        Self::LatLon(value)
    }
}

impl From<LatLng> for Location {
    fn from(value: LatLng) -> Self {
        Self::LatLng(value)
    }
}

impl From<LatitudeLongitude> for Location {
    fn from(value: LatitudeLongitude) -> Self {
        Self::LatitudeLongitude(value)
    }
}

impl From<LonLat> for Location {
    fn from(value: LonLat) -> Self {
        Self::LonLat(value)
    }
}

impl TryFrom<&[f64]> for Location {
    type Error = GeonavTypesError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self::LonLat(LonLat::try_from(value)?))
    }
}

impl AbsDiffEq for Location {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    /// Locations are equal if they have the same shape and their coordinates differ by no more
    /// than `epsilon` degrees.
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self.lat().abs_diff_eq(&other.lat(), epsilon)
            && self.lon().abs_diff_eq(&other.lon(), epsilon)
    }
}

/// Creates a new [`LatLon`] from latitude and longitude values (in degrees).
///
/// ```
/// use geonav_types::GeoPoint;
/// use geonav_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::shape::LatLon::new($lat, $lon)
    };
}
