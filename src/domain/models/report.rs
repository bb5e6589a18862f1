use serde::{Deserialize, Serialize};

use crate::domain::models::{Office, Official};
use crate::domain::LookupError;

/// Only these two office names are grouped into the report; every other
/// office in the response is dropped.
const SENATE_OFFICE: &str = "U.S. Senator";
const HOUSE_OFFICE: &str = "U.S. Representative";

/// The federal delegation for one address, grouped from a single
/// civic-information response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeReport {
    normalized_city: String,
    normalized_state: String,
    senators: Vec<Official>,
    representatives: Vec<Official>,
}

impl RepresentativeReport {
    /// Groups a response's offices and officials into senate/house buckets.
    ///
    /// Each value in an office's `officialIndices` is resolved positionally
    /// against `officials`. An index past the end of `officials` means the
    /// provider broke its own contract, so this fails with
    /// [`LookupError::MalformedResponse`] rather than truncating.
    pub fn assemble(
        normalized_city: String,
        normalized_state: String,
        offices: &[Office],
        officials: &[Official],
    ) -> Result<Self, LookupError> {
        let mut senators = Vec::new();
        let mut representatives = Vec::new();

        for office in offices {
            let bucket = match office.name() {
                SENATE_OFFICE => &mut senators,
                HOUSE_OFFICE => &mut representatives,
                _ => continue,
            };

            for &index in office.official_indices() {
                let official = officials.get(index).ok_or_else(|| {
                    LookupError::malformed(format!(
                        "office '{}' references official index {} but the response \
                         carries only {} officials",
                        office.name(),
                        index,
                        officials.len()
                    ))
                })?;
                bucket.push(official.clone());
            }
        }

        Ok(Self {
            normalized_city,
            normalized_state,
            senators,
            representatives,
        })
    }

    pub fn normalized_city(&self) -> &str {
        &self.normalized_city
    }

    pub fn normalized_state(&self) -> &str {
        &self.normalized_state
    }

    pub fn senators(&self) -> &[Official] {
        &self.senators
    }

    pub fn representatives(&self) -> &[Official] {
        &self.representatives
    }

    pub fn is_empty(&self) -> bool {
        self.senators.is_empty() && self.representatives.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{}, {} ({} senators, {} representatives)",
            self.normalized_city,
            self.normalized_state,
            self.senators.len(),
            self.representatives.len()
        )
    }
}
