//! Latitude/longitude bounding boxes for geocells.

use geo::{Point, Rect, coord};

use crate::cell::{self, GRID_SIZE};

/// A latitude/longitude rectangle.
///
/// The constructor reorders a swapped latitude pair so `south() <= north()`
/// always holds. Longitudes are stored exactly as given; no wrapping or
/// reordering is applied to them, since a cell's subdivision never produces a
/// swapped pair and callers may legitimately hold boxes near the
/// antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    north: f64,
    east: f64,
    south: f64,
    west: f64,
}

impl BoundingBox {
    /// Create a box from its northeast and southwest corners.
    pub fn new(north: f64, east: f64, south: f64, west: f64) -> Self {
        let (south, north) = if south <= north {
            (south, north)
        } else {
            (north, south)
        };
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// The zero-valued box, used for the empty (whole-globe) cell.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The box covering the entire globe.
    pub fn globe() -> Self {
        Self::new(90.0, 180.0, -90.0, -180.0)
    }

    #[inline]
    pub fn north(&self) -> f64 {
        self.north
    }

    #[inline]
    pub fn east(&self) -> f64 {
        self.east
    }

    #[inline]
    pub fn south(&self) -> f64 {
        self.south
    }

    #[inline]
    pub fn west(&self) -> f64 {
        self.west
    }

    /// Latitude extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    /// Center of the box.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    /// True iff the point lies inside the box, borders included.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        point.y() >= self.south
            && point.y() <= self.north
            && point.x() >= self.west
            && point.x() <= self.east
    }

    /// True iff the two boxes overlap, borders included.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.east < other.west
            || self.west > other.east
            || self.north < other.south
            || self.south > other.north)
    }

    /// Bridge into the `geo` crate's rectangle type.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }
}

/// Compute the bounding box of a geocell.
///
/// Starts from the whole globe and subdivides once per character. The empty
/// cell maps to the zero box.
///
/// # Examples
///
/// ```
/// let b = geocell::bbox::bounds("c");
/// assert_eq!(
///     (b.north(), b.east(), b.south(), b.west()),
///     (45.0, 90.0, 0.0, 0.0)
/// );
/// ```
pub fn bounds(cell: &str) -> BoundingBox {
    if cell.is_empty() {
        return BoundingBox::zero();
    }

    let globe = BoundingBox::globe();
    let mut north = globe.north();
    let mut south = globe.south();
    let mut east = globe.east();
    let mut west = globe.west();
    let grid = GRID_SIZE as f64;

    for c in cell.bytes() {
        let (x, y) = cell::subdiv_xy(c);
        let lat_span = (north - south) / grid;
        let lon_span = (east - west) / grid;

        south += lat_span * f64::from(y);
        north = south + lat_span;
        west += lon_span * f64::from(x);
        east = west + lon_span;
    }

    BoundingBox::new(north, east, south, west)
}
