//! Bounding boxes and containment tests.
//!
//! Containment is tested on longitude/latitude taken as plain planar coordinates, except for
//! [`inside_circle`], which uses the great-circle distance. Regions crossing the antimeridian
//! are not handled: a box or polygon is always taken to cover the longitudes between its
//! minimum and maximum going through 0.

mod bounding_box;
mod polygon;
mod segment;

pub use bounding_box::{bounding_box, inside_bounding_box};
pub use polygon::inside_polygon;

use crate::sphere::Sphere;
use geonav_types::{GeoPoint, Meters};

impl Sphere {
    /// Whether the great-circle distance between `location` and `center` is no more than
    /// `radius`.
    pub fn inside_circle(
        &self,
        location: &impl GeoPoint<Num = f64>,
        center: &impl GeoPoint<Num = f64>,
        radius: Meters,
    ) -> bool {
        self.distance(location, center) <= radius
    }
}

/// Whether `location` is within `radius` of `center` on the earth. Points exactly at `radius`
/// are inside.
pub fn inside_circle(
    location: &impl GeoPoint<Num = f64>,
    center: &impl GeoPoint<Num = f64>,
    radius: Meters,
) -> bool {
    Sphere::EARTH.inside_circle(location, center, radius)
}
