//! Validation for coordinates, resolutions, and cell strings.

use geo::Point;

use crate::cell::{ALPHABET, MAX_RESOLUTION};
use crate::error::{GeocellError, Result};

/// Validates a point has a finite longitude in [-180, 180] and a finite
/// latitude in [-90, 90].
///
/// # Examples
///
/// ```
/// use geo::Point;
/// use geocell::validation::validate_point;
///
/// assert!(validate_point(&Point::new(-74.0060, 40.7128)).is_ok());
/// assert!(validate_point(&Point::new(200.0, 40.0)).is_err());
/// assert!(validate_point(&Point::new(-74.0, 95.0)).is_err());
/// ```
pub fn validate_point(point: &Point<f64>) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(GeocellError::InvalidInput(format!(
            "longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(GeocellError::InvalidInput(format!(
            "latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(GeocellError::InvalidInput(format!(
            "longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(GeocellError::InvalidInput(format!(
            "latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates a cell resolution lies in `1..=MAX_RESOLUTION`.
pub fn validate_resolution(resolution: usize) -> Result<()> {
    if !(1..=MAX_RESOLUTION).contains(&resolution) {
        return Err(GeocellError::InvalidInput(format!(
            "resolution out of range [1, {}]: {}",
            MAX_RESOLUTION, resolution
        )));
    }
    Ok(())
}

/// Validates a cell string: non-empty, within the maximum resolution, and
/// drawn from the cell alphabet.
pub fn validate_cell(cell: &str) -> Result<()> {
    if cell.is_empty() || cell.len() > MAX_RESOLUTION {
        return Err(GeocellError::InvalidCell(format!(
            "cell length must be in [1, {}]: {:?}",
            MAX_RESOLUTION, cell
        )));
    }
    if let Some(c) = cell.chars().find(|c| !ALPHABET.contains(*c)) {
        return Err(GeocellError::InvalidCell(format!(
            "character {:?} not in cell alphabet: {:?}",
            c, cell
        )));
    }
    Ok(())
}
