//! The capability trait repositories expose to the search loop.

use std::cmp::Ordering;

use geo::Point;

/// A location-bearing entity the proximity search can rank.
///
/// Entities are owned by the caller; the search only reads these four
/// observations and holds entities for the duration of a single query. The
/// `key` is application data; duplicates are detected by coordinates, not
/// key, so two entities at the same spot count as one result.
pub trait Locatable {
    /// Latitude in degrees.
    fn latitude(&self) -> f64;

    /// Longitude in degrees.
    fn longitude(&self) -> f64;

    /// Stable application-level identifier.
    fn key(&self) -> &str;

    /// The entity's precomputed geocell prefix chain, up to the repository's
    /// maximum indexed resolution. See [`crate::cell::encode_chain`].
    fn geocells(&self) -> &[String];

    /// The entity's position as a `geo` point (x = longitude, y = latitude).
    fn point(&self) -> Point<f64> {
        Point::new(self.longitude(), self.latitude())
    }
}

/// A search hit: a location paired with its distance to the query point.
#[derive(Debug, Clone)]
pub struct Candidate<L> {
    pub location: L,
    /// Great-circle distance to the query, in meters.
    pub distance: f64,
}

impl<L: Locatable> Candidate<L> {
    pub fn new(location: L, distance: f64) -> Self {
        Self { location, distance }
    }

    /// Coordinate equality, the dedup criterion for result lists.
    pub fn same_coordinates(&self, other: &Candidate<L>) -> bool {
        self.location.latitude() == other.location.latitude()
            && self.location.longitude() == other.location.longitude()
    }
}

/// Sort candidates ascending by distance.
pub(crate) fn sort_by_distance<L: Locatable>(candidates: &mut [Candidate<L>]) {
    candidates.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
}

/// True iff some candidate in the list shares the candidate's coordinates.
pub(crate) fn contains_coordinates<L: Locatable>(
    candidates: &[Candidate<L>],
    candidate: &Candidate<L>,
) -> bool {
    candidates.iter().any(|c| c.same_coordinates(candidate))
}
