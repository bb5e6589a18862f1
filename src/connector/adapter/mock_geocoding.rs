use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::GeocodingService;
use crate::domain::{Coordinate, LookupError};

/// In-memory [`GeocodingService`] for tests. Returns a fixed location and
/// counts calls so tests can assert that geocoding happens exactly once per
/// resolution.
pub struct MockGeocoding {
    coordinate: Coordinate,
    formatted_address: String,
    resolve_calls: AtomicUsize,
    reverse_calls: AtomicUsize,
}

impl MockGeocoding {
    pub fn new() -> Self {
        Self::with_location(
            Coordinate::new(37.8719, -122.2585),
            "2530 Ridge Rd, Berkeley, CA 94709, USA".to_string(),
        )
    }

    pub fn with_location(coordinate: Coordinate, formatted_address: String) -> Self {
        Self {
            coordinate,
            formatted_address,
            resolve_calls: AtomicUsize::new(0),
            reverse_calls: AtomicUsize::new(0),
        }
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn reverse_calls(&self) -> usize {
        self.reverse_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGeocoding {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeocodingService for MockGeocoding {
    async fn resolve_coordinates(&self, address: &str) -> Result<Coordinate, LookupError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        debug!("Mock geocoding: {}", address);

        Ok(self.coordinate)
    }

    async fn resolve_address(&self, coordinate: &Coordinate) -> Result<String, LookupError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        debug!("Mock reverse geocoding: {}", coordinate);

        Ok(self.formatted_address.clone())
    }
}
