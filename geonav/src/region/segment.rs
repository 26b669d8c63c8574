use nalgebra::Point2;

/// A straight line segment between two points of the lon/lat plane.
#[derive(Debug, PartialEq)]
pub(super) struct Segment<'a>(pub &'a Point2<f64>, pub &'a Point2<f64>);

impl Segment<'_> {
    /// Shortest euclidean distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value
    ///   is the squared length of the normal
    /// * otherwise, the returned value is the smaller one of the squared distances between the
    ///   point and the segment's endpoints
    pub fn distance_to_point_sq(&self, point: &Point2<f64>) -> f64 {
        if self.0 == self.1 {
            return (point - self.0).norm_squared();
        }

        let ds = self.1 - self.0;
        let dp = point - self.0;
        let ds_len = ds.norm_squared();

        let r = dp.dot(&ds) / ds_len;
        if r <= 0.0 {
            dp.norm_squared()
        } else if r >= 1.0 {
            (point - self.1).norm_squared()
        } else {
            let s = (dp.y * ds.x - dp.x * ds.y) / ds_len;
            (s * s) * ds_len
        }
    }

    /// Whether the horizontal ray going from `point` to the east crosses the segment.
    ///
    /// Each segment is taken as half-open in latitude, so that a ray going exactly through a
    /// vertex is counted once for the two segments sharing it.
    pub fn crosses_ray_from(&self, point: &Point2<f64>) -> bool {
        let (a, b) = (self.0, self.1);
        if (a.y > point.y) == (b.y > point.y) {
            return false;
        }

        let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
        point.x < x_cross
    }
}
