//! Error types for geocell operations.

use thiserror::Error;

/// Errors produced at the crate's validation boundary.
///
/// The core grid algebra (encoding, adjacency, bounding boxes) is total over
/// its inputs and never raises; errors only occur when degenerate inputs are
/// rejected before a search runs.
#[derive(Debug, Error)]
pub enum GeocellError {
    /// A coordinate or parameter was outside its documented domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A cell string was malformed (wrong length or alphabet).
    #[error("invalid geocell: {0}")]
    InvalidCell(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeocellError>;
