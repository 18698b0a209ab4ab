//! Geocell-based proximity search over a caller-supplied repository.
//!
//! Entities are indexed by hierarchical base-16 cell strings; a query
//! expands a frontier of cells outward from the query point, sideways at one
//! resolution and then up to the next-coarser one, until the distance to the
//! frontier's nearest edge proves the K best results cannot improve.
//! The entity store itself stays on the caller's side of a search callback.
//!
//! ```rust
//! use geo::Point;
//!
//! // Cells of increasing resolution nest as string prefixes.
//! let frankfurt = Point::new(8.68, 50.11);
//! let coarse = geocell::cell::encode(&frankfurt, 3);
//! let fine = geocell::cell::encode(&frankfurt, 9);
//! assert!(fine.starts_with(&coarse));
//! ```

pub mod adjacency;
pub mod bbox;
pub mod cell;
pub mod distance;
pub mod error;
pub mod location;
pub mod proximity;
pub mod validation;

pub use adjacency::{Direction, adjacent, all_adjacents, distance_sorted_edges};
pub use bbox::{BoundingBox, bounds};
pub use cell::{ALPHABET, GRID_SIZE, MAX_RESOLUTION, covers, encode, encode_chain};
pub use distance::{EARTH_RADIUS_METERS, great_circle_distance};
pub use error::{GeocellError, Result};
pub use location::{Candidate, Locatable};
pub use proximity::{ProximityOptions, proximity_fetch};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::error::{GeocellError, Result};

    pub use crate::adjacency::{Direction, adjacent, all_adjacents};
    pub use crate::bbox::{BoundingBox, bounds};
    pub use crate::cell::{encode, encode_chain};
    pub use crate::distance::great_circle_distance;
    pub use crate::location::{Candidate, Locatable};
    pub use crate::proximity::{ProximityOptions, proximity_fetch};

    pub use geo::Point;
}
