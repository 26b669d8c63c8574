use crate::error::GeonavError;
use geonav_types::NewGeoPoint;

/// Arithmetic mean of the latitudes and longitudes of the locations.
///
/// Coordinates are averaged independently, which is a good estimate of the center only for
/// locations close to each other. The mean is not corrected for the antimeridian, so locations
/// at longitudes `-179` and `179` average to `0`.
///
/// The result is in the shape of the first location. Fails with [`GeonavError::InvalidInput`]
/// if `locations` is empty.
///
/// ```
/// use geonav::average;
/// use geonav_types::latlon;
///
/// let center = average(&[latlon!(0.0, 0.0), latlon!(10.0, 20.0)]).unwrap();
/// assert_eq!(center, latlon!(5.0, 10.0));
/// ```
pub fn average<P: NewGeoPoint<f64>>(locations: &[P]) -> Result<P, GeonavError> {
    let first = locations.first().ok_or_else(|| {
        GeonavError::InvalidInput("average of an empty list of locations".into())
    })?;

    let (lat_sum, lon_sum) = locations
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat(), lon + p.lon()));
    let count = locations.len() as f64;

    Ok(first.with_latlon(lat_sum / count, lon_sum / count))
}
