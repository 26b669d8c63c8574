use num_traits::Float;

/// A point on the surface of the earth, given by latitude and longitude in degrees.
///
/// Coordinates are not required to be in their canonical ranges.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;
}

/// A [`GeoPoint`] that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }

    /// Creates a point with the given coordinates in the same representation as `self`.
    ///
    /// Types that can hold more than one representation (like [`Location`](crate::Location))
    /// override this to keep the shape of the original value.
    fn with_latlon(&self, lat: N, lon: N) -> Self {
        Self::latlon(lat, lon)
    }
}

impl<T: GeoPoint + ?Sized> GeoPoint for &T {
    type Num = T::Num;

    fn lat(&self) -> Self::Num {
        (**self).lat()
    }

    fn lon(&self) -> Self::Num {
        (**self).lon()
    }
}
