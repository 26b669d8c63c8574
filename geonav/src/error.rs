//! Error types used by the crate.

use thiserror::Error;

/// Geonav error type.
///
/// Numerically degenerate inputs (coincident points, tracks with equal velocities) are not
/// errors: the operations document the value they return in such cases.
#[derive(Debug, Error)]
pub enum GeonavError {
    /// The input cannot produce a meaningful result, e.g. an empty list of locations.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
