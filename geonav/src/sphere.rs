//! Spherical model of the earth.

use geonav_types::{Meters, Radians};
use serde::{Deserialize, Serialize};

/// Mean radius of the earth used by default.
pub const EARTH_RADIUS: Meters = Meters(6_371_000.0);

/// Sphere the computations are done on.
///
/// All operations of the crate that depend on the size of the earth are methods of `Sphere`.
/// The free functions of the crate use [`Sphere::EARTH`].
///
/// The model can be loaded from any serde format:
///
/// ```
/// use geonav::Sphere;
/// use geonav_types::Meters;
///
/// let mars: Sphere = serde_json::from_str(r#"{"radius": 3389500.0}"#).unwrap();
/// assert_eq!(mars.radius(), Meters(3_389_500.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sphere {
    radius: Meters,
}

impl Sphere {
    /// Earth with the mean radius of 6371 km.
    pub const EARTH: Self = Self {
        radius: EARTH_RADIUS,
    };

    /// Creates a sphere with the given radius.
    pub fn new(radius: Meters) -> Self {
        Self { radius }
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> Meters {
        self.radius
    }

    /// Sets the radius of the sphere.
    pub fn with_radius(mut self, radius: Meters) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the radius of the sphere.
    pub fn set_radius(&mut self, radius: Meters) {
        self.radius = radius;
    }

    /// Length of the arc on the surface subtended by the central angle.
    pub fn arc_length(&self, angle: Radians) -> Meters {
        Meters(angle.0 * self.radius.0)
    }

    /// Central angle subtended by an arc of the given length.
    pub fn central_angle(&self, arc_length: Meters) -> Radians {
        Radians(arc_length.0 / self.radius.0)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arc_conversions() {
        let sphere = Sphere::default();
        assert_relative_eq!(
            sphere.arc_length(Radians(1.0)),
            EARTH_RADIUS,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            sphere.central_angle(sphere.arc_length(Radians(0.25))),
            Radians(0.25),
            epsilon = 1e-15
        );
    }

    #[test]
    fn builder() {
        let mut sphere = Sphere::EARTH.with_radius(Meters(1.0));
        assert_eq!(sphere.radius(), Meters(1.0));
        sphere.set_radius(Meters(2.0));
        assert_eq!(sphere, Sphere::new(Meters(2.0)));
    }

    #[test]
    fn missing_radius_defaults_to_earth() {
        let sphere: Sphere = serde_json::from_str("{}").unwrap();
        assert_eq!(sphere, Sphere::EARTH);
    }
}
