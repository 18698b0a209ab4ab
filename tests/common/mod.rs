//! Shared fixtures for the integration tests.

use geo::Point;
use geocell::cell::encode_chain;
use geocell::location::Locatable;

/// A minimal repository entity: coordinates, a key, and the precomputed
/// geocell chain a real store would index.
#[derive(Debug, Clone)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub key: String,
    pub cells: Vec<String>,
}

impl Place {
    pub fn new(lat: f64, lon: f64, key: &str, resolution: usize) -> Self {
        Self {
            lat,
            lon,
            key: key.to_string(),
            cells: encode_chain(&Point::new(lon, lat), resolution),
        }
    }
}

impl Locatable for Place {
    fn latitude(&self) -> f64 {
        self.lat
    }

    fn longitude(&self) -> f64 {
        self.lon
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn geocells(&self) -> &[String] {
        &self.cells
    }
}

/// A repository search closure over an in-memory place list: returns every
/// place whose chain contains one of the queried prefixes.
pub fn repository(places: Vec<Place>) -> impl FnMut(&[String]) -> Vec<Place> {
    move |cells: &[String]| {
        places
            .iter()
            .filter(|p| p.geocells().iter().any(|c| cells.contains(c)))
            .cloned()
            .collect()
    }
}
