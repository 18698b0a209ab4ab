//! The outward-expanding proximity search loop.
//!
//! The search starts at the query's cell at the maximum resolution and grows
//! a frontier of cells: one cell, then a neighbor toward the nearest edge,
//! then a 2×2 block, then the block's parents at the next-coarser
//! resolution, over and over. At each step the distance from the query to
//! the frontier's nearest edge is a lower bound on any entity not yet seen,
//! so the loop can stop as soon as that bound proves the current K-th best
//! cannot be beaten, or as soon as the bound passes the caller's distance
//! cap.

use geo::Point;
use log::{debug, trace, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::adjacency::{adjacent, distance_sorted_edges};
use crate::cell::{self, MAX_RESOLUTION};
use crate::distance::great_circle_distance;
use crate::error::Result;
use crate::location::{Candidate, Locatable, contains_coordinates, sort_by_distance};
use crate::validation;

/// Tuning knobs for a proximity fetch.
///
/// Deserializes with per-field defaults, so partial configuration files work:
///
/// ```
/// use geocell::proximity::ProximityOptions;
///
/// let opts: ProximityOptions = serde_json::from_str(r#"{"max_results": 5}"#).unwrap();
/// assert_eq!(opts.max_results, 5);
/// assert_eq!(opts.max_distance, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityOptions {
    /// Maximum number of results (the K in K-nearest).
    pub max_results: usize,

    /// Maximum distance from the query in meters. Zero or negative disables
    /// the cap.
    pub max_distance: f64,

    /// Resolution of the starting cell. Should match the highest resolution
    /// the repository indexes entity chains at.
    pub max_resolution: usize,
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_distance: 0.0,
            max_resolution: MAX_RESOLUTION,
        }
    }
}

impl ProximityOptions {
    /// Options for the K nearest entities with no distance cap.
    pub fn nearest(max_results: usize) -> Self {
        Self {
            max_results,
            ..Self::default()
        }
    }

    /// Cap results at `meters` from the query.
    pub fn within(mut self, meters: f64) -> Self {
        self.max_distance = meters;
        self
    }

    /// Start the search at the given cell resolution.
    pub fn at_resolution(mut self, resolution: usize) -> Self {
        self.max_resolution = resolution;
        self
    }
}

/// Fetch the nearest entities to `center` from a caller-supplied repository.
///
/// `search` receives a batch of cell prefixes and must return every indexed
/// entity whose own geocell chain contains at least one of them; ordering is
/// irrelevant and duplicates are tolerated. It is invoked synchronously,
/// once per frontier expansion; cells that were already searched are not
/// queried again.
///
/// Returns at most `options.max_results` entities sorted ascending by
/// great-circle distance to `center`, each within `options.max_distance`
/// meters when that cap is positive. Rejects non-finite or out-of-range
/// centers and resolutions outside `1..=MAX_RESOLUTION`.
///
/// # Examples
///
/// ```
/// use geo::Point;
/// use geocell::location::Locatable;
/// use geocell::proximity::{ProximityOptions, proximity_fetch};
///
/// #[derive(Clone)]
/// struct Shop {
///     lat: f64,
///     lon: f64,
///     key: String,
///     cells: Vec<String>,
/// }
///
/// impl Locatable for Shop {
///     fn latitude(&self) -> f64 { self.lat }
///     fn longitude(&self) -> f64 { self.lon }
///     fn key(&self) -> &str { &self.key }
///     fn geocells(&self) -> &[String] { &self.cells }
/// }
///
/// let shops = vec![Shop {
///     lat: 50.0,
///     lon: 8.0,
///     key: "mainz".into(),
///     cells: geocell::cell::encode_chain(&Point::new(8.0, 50.0), 10),
/// }];
///
/// let found = proximity_fetch(
///     &Point::new(8.0, 50.0),
///     &ProximityOptions::nearest(1).at_resolution(10),
///     |cells: &[String]| {
///         shops
///             .iter()
///             .filter(|s| s.geocells().iter().any(|c| cells.contains(c)))
///             .cloned()
///             .collect()
///     },
/// )
/// .unwrap();
/// assert_eq!(found[0].key, "mainz");
/// ```
pub fn proximity_fetch<L, F>(
    center: &Point<f64>,
    options: &ProximityOptions,
    mut search: F,
) -> Result<Vec<L>>
where
    L: Locatable,
    F: FnMut(&[String]) -> Vec<L>,
{
    if let Err(err) = validation::validate_point(center) {
        warn!("rejecting proximity fetch: {err}");
        return Err(err);
    }
    validation::validate_resolution(options.max_resolution)?;

    let max_results = options.max_results;
    if max_results == 0 {
        return Ok(Vec::new());
    }

    let mut results: Vec<Candidate<L>> = Vec::new();
    let mut searched_cells: FxHashSet<String> = FxHashSet::default();

    let mut cur_containing_geocell = cell::encode(center, options.max_resolution);
    let mut cur_geocells = vec![cur_containing_geocell.clone()];

    // Lower bound on the distance of any entity the frontier has not yet
    // covered. Starts at zero so the query's own cell is always searched
    // before the distance cap can fire.
    let mut closest_possible_next_result = 0.0_f64;

    while !cur_geocells.is_empty() {
        if options.max_distance > 0.0 && closest_possible_next_result > options.max_distance {
            debug!(
                "stopping: frontier lower bound {closest_possible_next_result:.0}m exceeds cap {:.0}m",
                options.max_distance
            );
            break;
        }

        let cur_geocells_unique = delete_records(&cur_geocells, &searched_cells);
        let fetched = search(&cur_geocells_unique);
        searched_cells.extend(cur_geocells.iter().cloned());
        trace!(
            "searched {} cells at resolution {}, {} candidates",
            cur_geocells_unique.len(),
            cur_geocells[0].len(),
            fetched.len()
        );

        let mut new_candidates: Vec<Candidate<L>> = fetched
            .into_iter()
            .map(|loc| {
                let d = great_circle_distance(center, &loc.point());
                Candidate::new(loc, d)
            })
            .collect();
        sort_by_distance(&mut new_candidates);
        new_candidates.truncate(max_results);
        for candidate in new_candidates {
            if !contains_coordinates(&results, &candidate) {
                results.push(candidate);
            }
        }
        sort_by_distance(&mut results);
        results.truncate(max_results);

        let sorted_edges = distance_sorted_edges(&cur_geocells, center);
        closest_possible_next_result = sorted_edges[0].1;

        if results.is_empty() || cur_geocells.len() == 4 {
            // Lateral growth is exhausted (or pointless): zoom out one
            // resolution and continue with the frontier's parents.
            cur_containing_geocell.pop();
            if cur_containing_geocell.is_empty() {
                break;
            }
            let mut seen = FxHashSet::default();
            let parents: Vec<String> = cur_geocells
                .iter()
                .filter(|c| !c.is_empty())
                .map(|c| c[..c.len() - 1].to_string())
                .filter(|p| seen.insert(p.clone()))
                .collect();
            if parents.is_empty() {
                break;
            }
            cur_geocells = parents;
        } else if cur_geocells.len() == 1 {
            let nearest_edge = sorted_edges[0].0;
            let neighbor = adjacent(&cur_geocells[0], nearest_edge);
            cur_geocells.push(neighbor);
        } else if cur_geocells.len() == 2 {
            // Complete the pair into a 2x2 block: expand both cells in the
            // frontier direction orthogonal to the containing cell's own
            // nearest edge.
            let containing_nearest =
                distance_sorted_edges(std::slice::from_ref(&cur_containing_geocell), center)[0].0;
            let perpendicular = sorted_edges
                .iter()
                .map(|&(d, _)| d)
                .find(|d| d.is_vertical() != containing_nearest.is_vertical());
            if let Some(direction) = perpendicular {
                let block: Vec<String> = cur_geocells
                    .iter()
                    .map(|c| adjacent(c, direction))
                    .collect();
                cur_geocells.extend(block);
            }
        }

        if results.len() >= max_results {
            let farthest = results[max_results - 1].distance;
            if closest_possible_next_result >= farthest {
                debug!(
                    "stopping: {} results held, frontier lower bound {closest_possible_next_result:.0}m \
                     cannot beat the farthest at {farthest:.0}m",
                    results.len()
                );
                break;
            }
        }
    }

    if options.max_distance > 0.0 {
        results.retain(|c| c.distance <= options.max_distance);
    }
    results.truncate(max_results);
    debug!("proximity fetch done: {} results", results.len());
    Ok(results.into_iter().map(|c| c.location).collect())
}

/// The subsequence of `data` with every member of `remove` dropped,
/// preserving order.
fn delete_records(data: &[String], remove: &FxHashSet<String>) -> Vec<String> {
    data.iter()
        .filter(|c| !remove.contains(*c))
        .cloned()
        .collect()
}
