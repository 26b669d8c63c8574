//! Geonav is a small toolkit of navigation geometry on a spherical earth.
//!
//! It computes great-circle distances and headings, moves a location by a heading and a
//! distance, builds bounding boxes and tests whether a location is inside a box, a circle or
//! a polygon. For two moving objects it estimates the time and distance of their closest
//! point of approach (CPA).
//!
//! # Quick start
//!
//! ```
//! use geonav::{cpa, distance_to, heading_to, inside_circle};
//! use geonav_types::{latlon, Degrees, Knots, Meters, Track};
//!
//! let kiel = latlon!(54.3233, 10.1228);
//! let laboe = latlon!(54.4037, 10.2227);
//!
//! let distance = distance_to(&kiel, &laboe);
//! assert!((distance.value() - 11_000.0).abs() < 100.0);
//! assert!(heading_to(&kiel, &laboe).value() < 45.0);
//! assert!(inside_circle(&laboe, &kiel, Meters(12_000.0)));
//!
//! let ferry = Track::new(kiel, Degrees(40.0), Knots(12.0));
//! let sailboat = Track::new(laboe, Degrees(220.0), Knots(5.0));
//! let approach = cpa(&ferry, &sailboat);
//! assert!(approach.time.value() > 0.0);
//! ```
//!
//! # Locations
//!
//! Operations are generic over the [`GeoPoint`](geonav_types::GeoPoint) trait, so any type
//! giving latitude and longitude in degrees can be used. Operations that return a location
//! require [`NewGeoPoint`](geonav_types::NewGeoPoint) and build the result in the same
//! representation as their input. The [`geonav_types`] crate (re-exported here) contains the
//! ready-made location shapes, unit newtypes and result values.
//!
//! # Earth model
//!
//! All computations are done on a sphere. The free functions of this crate use the mean earth
//! radius of 6371 km. To use a different radius, create a [`Sphere`] and call its methods,
//! which mirror the free functions.
//!
//! Boxes and polygons are checked on plain longitude/latitude coordinates, and neither boxes
//! nor polygons crossing the antimeridian are supported.
//!
//! # Logging
//!
//! The crate reports fallbacks taken for degenerate input (like the heading between two equal
//! points) through the [`log`] facade at debug level. No logger is installed by the crate.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod aggregate;
pub mod cpa;
mod distance;
pub mod error;
pub mod normalize;
pub mod region;
mod sphere;

pub use aggregate::average;
pub use cpa::{cpa, cpa_positions, position_at, CpaPositions};
pub use distance::{distance_to, heading_distance_to, heading_to, move_to, path_length};
pub use error::GeonavError;
pub use normalize::{
    deg_to_rad, normalize_heading, normalize_latitude, normalize_location, normalize_longitude,
    rad_to_deg,
};
pub use region::{bounding_box, inside_bounding_box, inside_circle, inside_polygon};
pub use sphere::{Sphere, EARTH_RADIUS};

// Reexport geonav_types
pub use geonav_types;
