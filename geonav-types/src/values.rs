use crate::point::{GeoPoint, NewGeoPoint};
use crate::shape::Location;
use crate::units::{Degrees, Meters, MetersPerSecond, Seconds};
use serde::{Deserialize, Serialize};

/// Box given by two opposite corners.
///
/// Boxes computed by `geonav` have `top_left` at the maximum latitude and minimum longitude and
/// `bottom_right` at the minimum latitude and maximum longitude. Boxes passed by a caller may
/// have their corners on either diagonal: use [`BoundingBox::extent`] to get the ordered
/// bounds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<P = Location> {
    /// North-west corner.
    pub top_left: P,
    /// South-east corner.
    pub bottom_right: P,
}

impl<P> BoundingBox<P> {
    /// Creates a new box from its corners.
    pub fn new(top_left: P, bottom_right: P) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl<P: GeoPoint<Num = f64>> BoundingBox<P> {
    /// Bounds of the box, independent of which diagonal the corners are on.
    pub fn extent(&self) -> Extent {
        Extent::from_point(&self.top_left).merge(Extent::from_point(&self.bottom_right))
    }
}

impl<P: NewGeoPoint<f64>> BoundingBox<P> {
    /// Middle of the box, in the shape of `top_left`.
    ///
    /// Boxes crossing the antimeridian are not handled: the result is the middle of the
    /// longitude range going through 0.
    pub fn center(&self) -> P {
        let extent = self.extent();
        self.top_left.with_latlon(
            (extent.min_lat + extent.max_lat) / 2.0,
            (extent.min_lon + extent.max_lon) / 2.0,
        )
    }
}

/// Ordered latitude and longitude bounds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Southern bound.
    pub min_lat: f64,
    /// Northern bound.
    pub max_lat: f64,
    /// Western bound.
    pub min_lon: f64,
    /// Eastern bound.
    pub max_lon: f64,
}

impl Extent {
    /// Extent of a single point.
    pub fn from_point(p: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            min_lat: p.lat(),
            max_lat: p.lat(),
            min_lon: p.lon(),
            max_lon: p.lon(),
        }
    }

    /// Smallest extent containing all the points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: GeoPoint<Num = f64> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |extent, p| {
            extent.merge(Self::from_point(p))
        }))
    }

    /// Smallest extent containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            min_lat: self.min_lat.min(other.min_lat),
            max_lat: self.max_lat.max(other.max_lat),
            min_lon: self.min_lon.min(other.min_lon),
            max_lon: self.max_lon.max(other.max_lon),
        }
    }

    /// Whether the point is inside the extent or on its border.
    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        self.min_lat <= point.lat()
            && self.max_lat >= point.lat()
            && self.min_lon <= point.lon()
            && self.max_lon >= point.lon()
    }
}

/// Direction and distance from one location to another.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingDistance {
    /// Heading, degrees clockwise from true north. By convention in `[0, 360)`.
    pub heading: Degrees,
    /// Distance along the surface.
    pub distance: Meters,
}

impl HeadingDistance {
    /// Creates a new value.
    pub fn new(heading: Degrees, distance: Meters) -> Self {
        Self { heading, distance }
    }
}

/// A location moving with constant heading and speed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track<P = Location> {
    /// Position at the moment of sampling.
    pub position: P,
    /// Direction of travel, degrees clockwise from true north.
    pub heading: Degrees,
    /// Speed over ground.
    pub speed: MetersPerSecond,
}

impl<P> Track<P> {
    /// Creates a new track. The speed can be given in any supported unit.
    ///
    /// ```
    /// use geonav_types::{latlon, Degrees, Knots, Track};
    ///
    /// let track = Track::new(latlon!(54.0, 10.0), Degrees(45.0), Knots(10.0));
    /// assert!((track.speed.value() - 5.144).abs() < 0.001);
    /// ```
    pub fn new(position: P, heading: Degrees, speed: impl Into<MetersPerSecond>) -> Self {
        Self {
            position,
            heading,
            speed: speed.into(),
        }
    }
}

/// Time and distance of the closest approach of two tracks.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeDistance {
    /// Time from the sampling moment. Negative if the closest approach is in the past.
    pub time: Seconds,
    /// Separation of the tracks at that time.
    pub distance: Meters,
}

impl TimeDistance {
    /// Creates a new value.
    pub fn new(time: Seconds, distance: Meters) -> Self {
        Self { time, distance }
    }
}
