use std::sync::Arc;

use tracing::info;

use crate::application::GeocodingService;
use crate::domain::{Coordinate, LookupError};

/// A geocoded address together with the provider's canonical formatting of
/// the same location.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDistrict {
    coordinate: Coordinate,
    formatted_address: String,
}

impl ResolvedDistrict {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn formatted_address(&self) -> &str {
        &self.formatted_address
    }
}

/// Resolves an address to its coordinate and canonical form in one pass.
///
/// The coordinate is computed exactly once and reused for the reverse
/// lookup; callers get both halves without issuing duplicate geocoding
/// requests.
pub struct ResolveDistrictUseCase {
    geocoding_service: Arc<dyn GeocodingService>,
}

impl ResolveDistrictUseCase {
    pub fn new(geocoding_service: Arc<dyn GeocodingService>) -> Self {
        Self { geocoding_service }
    }

    pub async fn execute(&self, address: &str) -> Result<ResolvedDistrict, LookupError> {
        info!("Resolving district for: {}", address);

        let coordinate = self.geocoding_service.resolve_coordinates(address).await?;
        let formatted_address = self.geocoding_service.resolve_address(&coordinate).await?;

        info!(
            "Resolved {} to {} ({})",
            address, coordinate, formatted_address
        );

        Ok(ResolvedDistrict {
            coordinate,
            formatted_address,
        })
    }
}
