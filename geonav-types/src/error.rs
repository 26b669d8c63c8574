//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum GeonavTypesError {
    /// Data cannot be interpreted as a location.
    #[error("invalid location data: {0}")]
    Conversion(String),
}
