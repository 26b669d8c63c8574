//! Closest point of approach of two tracks.
//!
//! Both tracks are assumed to keep their heading and speed. The positions are projected onto a
//! local plane around the first track, where the tracks become straight lines and the closest
//! approach has a closed-form solution. The projection is only valid while the tracks stay
//! within a few tens of kilometers from each other and away from the poles.

use crate::normalize::{deg_to_rad, normalize_longitude};
use crate::sphere::Sphere;
use geonav_types::{
    Degrees, GeoPoint, HeadingDistance, Meters, NewGeoPoint, Seconds, TimeDistance, Track,
};
use log::{debug, trace};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Squared relative speed (m²/s²) below which two tracks are considered to move together.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Closest approach together with the positions of both tracks at that moment.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpaPositions<P> {
    /// Time and distance of the closest approach.
    pub time_distance: TimeDistance,
    /// Position of the first track.
    pub own: P,
    /// Position of the second track.
    pub other: P,
}

impl Sphere {
    /// Offset of `to` from `from` in meters, as `(east, north)`.
    fn local_offset(
        &self,
        from: &impl GeoPoint<Num = f64>,
        to: &impl GeoPoint<Num = f64>,
    ) -> Vector2<f64> {
        let d_lon = normalize_longitude(to.lon() - from.lon());
        let d_lat = to.lat() - from.lat();
        let cos_lat = deg_to_rad(Degrees(from.lat())).cos();

        Vector2::new(
            self.arc_length(deg_to_rad(Degrees(d_lon))).0 * cos_lat,
            self.arc_length(deg_to_rad(Degrees(d_lat))).0,
        )
    }

    /// Time and distance of the closest approach of the two tracks.
    ///
    /// The time is counted from the moment the tracks were sampled and is negative if the
    /// tracks are already moving apart. If the tracks have the same velocity their separation
    /// never changes, and the current separation is returned with zero time.
    pub fn cpa(
        &self,
        own: &Track<impl GeoPoint<Num = f64>>,
        other: &Track<impl GeoPoint<Num = f64>>,
    ) -> TimeDistance {
        let dp = self.local_offset(&own.position, &other.position);
        let dv = velocity(other) - velocity(own);

        let dv_sq = dv.norm_squared();
        let time = if dv_sq < PARALLEL_EPSILON {
            debug!("Tracks move with the same velocity, closest approach is now");
            0.0
        } else {
            -dp.dot(&dv) / dv_sq
        };

        let distance = (dp + dv * time).norm();
        trace!("CPA: dp = {dp:?}, dv = {dv:?}, t = {time}, d = {distance}");

        TimeDistance::new(Seconds(time), Meters(distance))
    }

    /// Position of the track after `time`. Negative time gives the position in the past.
    ///
    /// The movement is computed with [`Sphere::move_to`].
    pub fn position_at<P: NewGeoPoint<f64>>(&self, track: &Track<P>, time: Seconds) -> P {
        self.move_to(
            &track.position,
            HeadingDistance::new(track.heading, track.speed * time),
        )
    }

    /// Closest approach of the two tracks and their positions at that moment.
    pub fn cpa_positions<P: NewGeoPoint<f64>>(
        &self,
        own: &Track<P>,
        other: &Track<P>,
    ) -> CpaPositions<P> {
        let time_distance = self.cpa(own, other);
        CpaPositions {
            time_distance,
            own: self.position_at(own, time_distance.time),
            other: self.position_at(other, time_distance.time),
        }
    }
}

/// Velocity of the track in meters per second, as `(east, north)`.
fn velocity<P>(track: &Track<P>) -> Vector2<f64> {
    let heading = deg_to_rad(track.heading);
    Vector2::new(heading.sin(), heading.cos()) * track.speed.0
}

/// Time and distance of the closest approach of the two tracks on the earth.
///
/// See [`Sphere::cpa`].
///
/// ```
/// use geonav::cpa;
/// use geonav_types::{latlon, Degrees, Knots, Track};
///
/// let own = Track::new(latlon!(54.0, 10.0), Degrees(0.0), Knots(10.0));
/// let other = Track::new(latlon!(54.0, 10.01), Degrees(0.0), Knots(10.0));
///
/// let result = cpa(&own, &other);
/// assert_eq!(result.time.value(), 0.0);
/// assert!((result.distance.value() - 654.0).abs() < 1.0);
/// ```
pub fn cpa(
    own: &Track<impl GeoPoint<Num = f64>>,
    other: &Track<impl GeoPoint<Num = f64>>,
) -> TimeDistance {
    Sphere::EARTH.cpa(own, other)
}

/// Position of the track after `time` on the earth.
pub fn position_at<P: NewGeoPoint<f64>>(track: &Track<P>, time: Seconds) -> P {
    Sphere::EARTH.position_at(track, time)
}

/// Closest approach of the two tracks on the earth and their positions at that moment.
pub fn cpa_positions<P: NewGeoPoint<f64>>(own: &Track<P>, other: &Track<P>) -> CpaPositions<P> {
    Sphere::EARTH.cpa_positions(own, other)
}
