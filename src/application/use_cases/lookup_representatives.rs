use std::sync::Arc;

use tracing::info;

use crate::application::RepresentativeService;
use crate::domain::{LookupError, RepresentativeReport};

pub struct LookupRepresentativesUseCase {
    representative_service: Arc<dyn RepresentativeService>,
}

impl LookupRepresentativesUseCase {
    pub fn new(representative_service: Arc<dyn RepresentativeService>) -> Self {
        Self {
            representative_service,
        }
    }

    pub async fn execute(&self, address: &str) -> Result<RepresentativeReport, LookupError> {
        info!("Looking up representatives for: {}", address);

        let report = self
            .representative_service
            .lookup_representatives(address)
            .await?;

        info!("Resolved delegation: {}", report.summary());

        Ok(report)
    }
}
