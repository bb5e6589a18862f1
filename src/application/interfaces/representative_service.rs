use async_trait::async_trait;

use crate::domain::{LookupError, RepresentativeReport};

/// Resolves a postal address to its federal delegation.
///
/// The civic API accepts the free-text address directly; no geocoding step
/// is required first.
#[async_trait]
pub trait RepresentativeService: Send + Sync {
    async fn lookup_representatives(
        &self,
        address: &str,
    ) -> Result<RepresentativeReport, LookupError>;
}
