use async_trait::async_trait;

use crate::domain::{Coordinate, LookupError};

/// Converts a postal address to geographic coordinates and back.
///
/// One logical request per call, no shared mutable state, no automatic
/// retries. Dropping the returned future cancels the underlying transport,
/// which is how abandoned user actions are handled.
#[async_trait]
pub trait GeocodingService: Send + Sync {
    /// Resolves a free-text address to the provider's top-ranked match.
    ///
    /// The provider may return several candidates; only the first is used —
    /// a deliberate precision/simplicity trade-off that callers should be
    /// aware of.
    async fn resolve_coordinates(&self, address: &str) -> Result<Coordinate, LookupError>;

    /// Reverse lookup: formats the coordinate pair back into a postal
    /// address. Not guaranteed to round-trip textually with
    /// [`resolve_coordinates`](Self::resolve_coordinates).
    async fn resolve_address(&self, coordinate: &Coordinate) -> Result<String, LookupError>;
}
