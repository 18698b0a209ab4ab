//! Great-circle distance on the sphere the cell grid is calibrated to.

use geo::Point;

/// Sphere radius in meters. Part of the grid's distance calibration, so edge
/// lower bounds and candidate distances stay mutually consistent.
pub const EARTH_RADIUS_METERS: f64 = 6_378_135.0;

/// Great-circle distance between two points, in meters.
///
/// Uses the spherical law of cosines. The `acos` argument is not clamped;
/// callers are expected to stay within numerical tolerance of the sphere.
///
/// # Examples
///
/// ```
/// use geo::Point;
/// use geocell::distance::great_circle_distance;
///
/// let d = great_circle_distance(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0));
/// assert!((d - 111_319.0).abs() < 10.0);
/// ```
pub fn great_circle_distance(p1: &Point<f64>, p2: &Point<f64>) -> f64 {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let lon1 = p1.x().to_radians();
    let lon2 = p2.x().to_radians();

    EARTH_RADIUS_METERS
        * (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).cos()).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = great_circle_distance(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0));
        assert!((d - 111_319.0).abs() < 10.0);
    }

    #[test]
    fn test_symmetry() {
        let a = Point::new(8.0, 50.0);
        let b = Point::new(-74.0060, 40.7128);
        let ab = great_circle_distance(&a, &b);
        let ba = great_circle_distance(&b, &a);
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 6_000_000.0 && ab < 6_500_000.0);
    }

    #[test]
    fn test_zero_at_identical_point() {
        let p = Point::new(0.0, 0.0);
        assert_eq!(great_circle_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_meridian_degree_spacing() {
        // One degree of latitude is the same arc length anywhere on a sphere.
        let equator =
            great_circle_distance(&Point::new(8.0, 0.0), &Point::new(8.0, 1.0));
        let temperate =
            great_circle_distance(&Point::new(8.0, 49.0), &Point::new(8.0, 50.0));
        assert!((equator - temperate).abs() < 1.0);
    }
}
