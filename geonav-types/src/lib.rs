//! Location shapes, units and value types shared by the `geonav` algorithms.
//!
//! Algorithms never look at the concrete representation of a location. They read coordinates
//! through the [`GeoPoint`] trait and build results through [`NewGeoPoint`], so any type
//! implementing these traits can be used. This crate provides four ready-made shapes (see
//! [`shape`]) and a [`Location`] enum that can hold any of them.
//!
//! Quantities with units are represented by newtypes (see [`units`]), so that a heading in
//! degrees cannot be passed where radians are expected, and a speed in knots has to be
//! converted before it is used as meters per second.

pub mod error;
mod point;
pub mod shape;
pub mod units;
mod values;

pub use point::{GeoPoint, NewGeoPoint};
pub use shape::{LatLng, LatLon, LatitudeLongitude, Location, LocationShape, LonLat};
pub use units::{Degrees, KilometersPerHour, Knots, Meters, MetersPerSecond, Radians, Seconds};
pub use values::{BoundingBox, Extent, HeadingDistance, TimeDistance, Track};
