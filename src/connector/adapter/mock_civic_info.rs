use async_trait::async_trait;
use tracing::debug;

use crate::application::RepresentativeService;
use crate::domain::{LookupError, Office, Official, RepresentativeReport};

/// In-memory [`RepresentativeService`] for tests. Assembles the report from
/// preset offices and officials on every call, exercising the same grouping
/// and index validation as the real adapter. An empty preset behaves like an
/// address with no civic data.
pub struct MockCivicInfo {
    normalized_city: String,
    normalized_state: String,
    offices: Vec<Office>,
    officials: Vec<Official>,
}

impl MockCivicInfo {
    pub fn new() -> Self {
        Self::with_response("Berkeley".to_string(), "CA".to_string(), vec![], vec![])
    }

    pub fn with_response(
        normalized_city: String,
        normalized_state: String,
        offices: Vec<Office>,
        officials: Vec<Official>,
    ) -> Self {
        Self {
            normalized_city,
            normalized_state,
            offices,
            officials,
        }
    }
}

impl Default for MockCivicInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepresentativeService for MockCivicInfo {
    async fn lookup_representatives(
        &self,
        address: &str,
    ) -> Result<RepresentativeReport, LookupError> {
        debug!("Mock civic lookup: {}", address);

        if self.offices.is_empty() && self.officials.is_empty() {
            return Err(LookupError::not_found("address yields no civic data"));
        }

        RepresentativeReport::assemble(
            self.normalized_city.clone(),
            self.normalized_state.clone(),
            &self.offices,
            &self.officials,
        )
    }
}
