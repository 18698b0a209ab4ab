//! Cell adjacency and frontier edge ranking.
//!
//! Neighbors are computed through each character's (x, y) decomposition with
//! a borrow/carry running from the innermost character outward. The grid is
//! a torus east-west: a carry off the outermost character wraps around the
//! globe silently. North-south it is not: a surviving vertical carry would
//! cross a pole, so the result is the empty string, which the search loop
//! carries as a "no neighbor here" marker.

use std::cmp::Ordering;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::bbox::bounds;
use crate::cell::{self, GRID_SIZE};
use crate::distance::great_circle_distance;

/// One of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, cardinals first.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Grid offsets as (dx, dy); north is +y, east is +x.
    #[inline]
    pub fn offsets(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    #[inline]
    pub fn dx(self) -> i8 {
        self.offsets().0
    }

    #[inline]
    pub fn dy(self) -> i8 {
        self.offsets().1
    }

    /// True for north/south moves (no east-west component).
    #[inline]
    pub fn is_vertical(self) -> bool {
        self.dx() == 0
    }
}

/// The neighbor cell at the same resolution in the given direction.
///
/// Returns the empty string when the move would cross the North or South
/// pole, and for the empty input cell. East-west moves wrap around the
/// globe.
///
/// # Examples
///
/// ```
/// use geocell::adjacency::{Direction, adjacent};
///
/// assert_eq!(adjacent("00", Direction::East), "01");
/// assert_eq!(adjacent("f", Direction::North), "");
/// ```
pub fn adjacent(cell: &str, direction: Direction) -> String {
    let (mut dx, mut dy) = direction.offsets();
    let max = (GRID_SIZE - 1) as u8;

    let mut chars = cell.as_bytes().to_vec();
    let mut i = chars.len();
    while i > 0 && (dx != 0 || dy != 0) {
        i -= 1;
        let (mut x, mut y) = cell::subdiv_xy(chars[i]);

        if dx == -1 {
            if x == 0 {
                x = max; // borrow continues into the next-outer character
            } else {
                x -= 1;
                dx = 0;
            }
        } else if dx == 1 {
            if x == max {
                x = 0;
            } else {
                x += 1;
                dx = 0;
            }
        }

        if dy == 1 {
            if y == max {
                y = 0;
            } else {
                y += 1;
                dy = 0;
            }
        } else if dy == -1 {
            if y == 0 {
                y = max;
            } else {
                y -= 1;
                dy = 0;
            }
        }

        chars[i] = cell::subdiv_char(x, y);
    }

    // A leftover horizontal carry wrapped around the globe and is fine; a
    // leftover vertical carry crossed a pole, where there is no neighbor.
    if dy != 0 {
        return String::new();
    }
    String::from_utf8(chars).unwrap_or_default()
}

/// Every existing neighbor of a cell, polar misses omitted.
pub fn all_adjacents(cell: &str) -> Vec<String> {
    Direction::ALL
        .iter()
        .map(|&d| adjacent(cell, d))
        .filter(|c| !c.is_empty())
        .collect()
}

/// Rank the four cardinal edges of a cell set by distance from a point.
///
/// The union box of the cells is taken (northernmost, southernmost,
/// easternmost, westernmost extents across all cell boxes), and each edge is
/// paired with the great-circle distance from `center` to that edge. The
/// result is sorted ascending, so the first entry is a lower bound on the
/// distance to anything beyond the frontier in that direction.
///
/// The east edge is measured at the box's southernmost latitude rather than
/// the query latitude.
pub fn distance_sorted_edges(cells: &[String], center: &Point<f64>) -> Vec<(Direction, f64)> {
    if cells.is_empty() {
        return Vec::new();
    }

    let mut max_north = f64::NEG_INFINITY;
    let mut max_east = f64::NEG_INFINITY;
    let mut max_south = f64::INFINITY;
    let mut max_west = f64::INFINITY;
    for b in cells.iter().map(|c| bounds(c)) {
        max_north = max_north.max(b.north());
        max_east = max_east.max(b.east());
        max_south = max_south.min(b.south());
        max_west = max_west.min(b.west());
    }

    let mut edges = vec![
        (
            Direction::South,
            great_circle_distance(&Point::new(center.x(), max_south), center),
        ),
        (
            Direction::North,
            great_circle_distance(&Point::new(center.x(), max_north), center),
        ),
        (
            Direction::West,
            great_circle_distance(&Point::new(max_west, center.y()), center),
        ),
        (
            Direction::East,
            great_circle_distance(&Point::new(max_east, max_south), center),
        ),
    ];
    edges.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    edges
}
