use super::segment::Segment;
use crate::error::GeonavError;
use geonav_types::GeoPoint;
use nalgebra::Point2;

/// Squared distance (in degrees) from an edge at which a point is considered to lie on it.
const EDGE_TOLERANCE_SQ: f64 = 1e-18;

/// Whether `location` lies inside the polygon or on its boundary.
///
/// The polygon is given by its vertices in order and is closed implicitly: the last vertex is
/// connected to the first one, and repeating the first vertex at the end is allowed but not
/// required. Longitude and latitude are used as planar coordinates and the even-odd rule
/// decides which points are inside, so self-intersecting polygons have holes where they
/// overlap themselves. Points on an edge or at a vertex are always inside.
///
/// Fails with [`GeonavError::InvalidInput`] if the polygon has less than three distinct
/// vertices.
///
/// ```
/// use geonav::inside_polygon;
/// use geonav_types::latlon;
///
/// let square = [latlon!(0.0, 0.0), latlon!(0.0, 1.0), latlon!(1.0, 1.0), latlon!(1.0, 0.0)];
/// assert!(inside_polygon(&latlon!(0.5, 0.5), &square).unwrap());
/// assert!(inside_polygon(&latlon!(0.0, 0.5), &square).unwrap());
/// assert!(!inside_polygon(&latlon!(1.5, 0.5), &square).unwrap());
/// ```
pub fn inside_polygon<P: GeoPoint<Num = f64>>(
    location: &impl GeoPoint<Num = f64>,
    polygon: &[P],
) -> Result<bool, GeonavError> {
    let vertices: Vec<Point2<f64>> = polygon
        .iter()
        .map(|p| Point2::new(p.lon(), p.lat()))
        .collect();

    if !has_three_distinct(&vertices) {
        return Err(GeonavError::InvalidInput(format!(
            "polygon must have at least 3 distinct vertices, got {} vertices",
            vertices.len()
        )));
    }

    let point = Point2::new(location.lon(), location.lat());
    let segments = || {
        vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(a, b)| Segment(a, b))
    };

    if segments().any(|s| s.distance_to_point_sq(&point) <= EDGE_TOLERANCE_SQ) {
        return Ok(true);
    }

    let crossings = segments().filter(|s| s.crosses_ray_from(&point)).count();
    Ok(crossings % 2 == 1)
}

/// Whether there are at least three distinct vertices. Stops at the third one found.
fn has_three_distinct(vertices: &[Point2<f64>]) -> bool {
    let mut iter = vertices.iter();
    let Some(first) = iter.next() else {
        return false;
    };
    let Some(second) = iter.by_ref().find(|v| *v != first) else {
        return false;
    };

    iter.any(|v| v != first && v != second)
}
