use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::application::RepresentativeService;
use crate::connector::adapter::http::{read_success_body, transport_error};
use crate::connector::adapter::ApiConfig;
use crate::domain::{LookupError, Office, Official, RepresentativeReport};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct CivicResponse {
    #[serde(rename = "normalizedInput")]
    normalized_input: Option<NormalizedInput>,
    #[serde(default)]
    offices: Vec<WireOffice>,
    #[serde(default)]
    officials: Vec<WireOfficial>,
}

#[derive(Deserialize)]
struct NormalizedInput {
    city: Option<String>,
    state: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireOffice {
    name: Option<String>,
    #[serde(default)]
    official_indices: Vec<usize>,
}

/// The wire field is `party`, an ordered array whose first entry is the
/// primary affiliation; it maps onto the domain's `parties`.
#[derive(Deserialize)]
struct WireOfficial {
    name: Option<String>,
    #[serde(default)]
    party: Vec<String>,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    urls: Vec<String>,
}

/// HTTP client for the Google Civic Information API.
///
/// Sends the raw free-text address — no geocoding step — and groups the
/// response's offices and officials into a [`RepresentativeReport`]. Grouping
/// and index validation live in the domain type; this adapter only translates
/// the wire shape.
pub struct CivicInfoClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl CivicInfoClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: config.api_key().to_string(),
            url: config.civic_url().to_string(),
        }
    }

    fn parse_report(body: &str) -> Result<RepresentativeReport, LookupError> {
        let response: CivicResponse = serde_json::from_str(body).map_err(|e| {
            LookupError::malformed(format!("failed to deserialize civic response: {e}"))
        })?;

        if response.offices.is_empty() && response.officials.is_empty() {
            return Err(LookupError::not_found(
                "address yields no civic data",
            ));
        }

        let normalized = response
            .normalized_input
            .ok_or_else(|| LookupError::malformed("response carries no normalizedInput"))?;
        let city = normalized
            .city
            .ok_or_else(|| LookupError::malformed("normalizedInput carries no city"))?;
        let state = normalized
            .state
            .ok_or_else(|| LookupError::malformed("normalizedInput carries no state"))?;

        let offices: Vec<Office> = response
            .offices
            .into_iter()
            .map(|o| {
                let name = o
                    .name
                    .ok_or_else(|| LookupError::malformed("office entry carries no name"))?;
                Ok(Office::new(name, o.official_indices))
            })
            .collect::<Result<_, LookupError>>()?;

        let officials: Vec<Official> = response
            .officials
            .into_iter()
            .map(|o| {
                let name = o
                    .name
                    .ok_or_else(|| LookupError::malformed("official entry carries no name"))?;
                Ok(Official::new(name, o.party, o.phones, o.urls))
            })
            .collect::<Result<_, LookupError>>()?;

        RepresentativeReport::assemble(city, state, &offices, &officials)
    }
}

#[async_trait]
impl RepresentativeService for CivicInfoClient {
    async fn lookup_representatives(
        &self,
        address: &str,
    ) -> Result<RepresentativeReport, LookupError> {
        debug!("Looking up civic data for: {}", address);

        let response = self
            .client
            .get(&self.url)
            .query(&[("address", address), ("key", &self.api_key)])
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_success_body(response).await?;

        Self::parse_report(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SENATORS_ONE_MAYOR: &str = r#"{
        "normalizedInput": {"city": "Berkeley", "state": "CA"},
        "offices": [
            {"name": "Mayor", "officialIndices": [0]},
            {"name": "U.S. Senator", "officialIndices": [2, 1]}
        ],
        "officials": [
            {"name": "Jesse Arreguin", "party": ["Democratic Party"], "phones": ["(510) 981-7100"], "urls": ["https://berkeleyca.gov"]},
            {"name": "Alex Padilla", "party": ["Democratic Party"], "phones": ["(202) 224-3553"], "urls": ["https://www.padilla.senate.gov"]},
            {"name": "Laphonza Butler", "party": ["Democratic Party"], "phones": ["(202) 224-3841"], "urls": ["https://www.butler.senate.gov"]}
        ]
    }"#;

    #[test]
    fn parse_report_reads_indices_positionally() {
        let report = CivicInfoClient::parse_report(TWO_SENATORS_ONE_MAYOR).unwrap();

        // officialIndices [2, 1] must resolve officials[2] then officials[1],
        // never the office's own loop position.
        assert_eq!(report.senators().len(), 2);
        assert_eq!(report.senators()[0].name(), "Laphonza Butler");
        assert_eq!(report.senators()[1].name(), "Alex Padilla");
    }

    #[test]
    fn parse_report_drops_non_federal_offices() {
        let report = CivicInfoClient::parse_report(TWO_SENATORS_ONE_MAYOR).unwrap();

        assert!(report.representatives().is_empty());
        assert!(report
            .senators()
            .iter()
            .all(|o| o.name() != "Jesse Arreguin"));
    }

    #[test]
    fn parse_report_extracts_normalized_input() {
        let report = CivicInfoClient::parse_report(TWO_SENATORS_ONE_MAYOR).unwrap();

        assert_eq!(report.normalized_city(), "Berkeley");
        assert_eq!(report.normalized_state(), "CA");
    }

    #[test]
    fn parse_report_out_of_bounds_index_is_malformed() {
        let body = r#"{
            "normalizedInput": {"city": "Berkeley", "state": "CA"},
            "offices": [{"name": "U.S. Senator", "officialIndices": [5]}],
            "officials": [
                {"name": "A", "party": [], "phones": [], "urls": []},
                {"name": "B", "party": [], "phones": [], "urls": []},
                {"name": "C", "party": [], "phones": [], "urls": []}
            ]
        }"#;

        let err = CivicInfoClient::parse_report(body).unwrap_err();

        assert!(err.is_malformed());
    }

    #[test]
    fn parse_report_empty_civic_data_is_not_found() {
        let body = r#"{"normalizedInput": {"city": "Nowhere", "state": "ZZ"}, "offices": [], "officials": []}"#;

        let err = CivicInfoClient::parse_report(body).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn parse_report_missing_normalized_input_is_malformed() {
        let body = r#"{
            "offices": [{"name": "U.S. Senator", "officialIndices": [0]}],
            "officials": [{"name": "A", "party": [], "phones": [], "urls": []}]
        }"#;

        let err = CivicInfoClient::parse_report(body).unwrap_err();

        assert!(err.is_malformed());
    }

    #[test]
    fn parse_report_invalid_json_is_malformed() {
        let err = CivicInfoClient::parse_report("not json at all").unwrap_err();

        assert!(err.is_malformed());
    }
}
