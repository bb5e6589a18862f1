use serde::{Deserialize, Serialize};

use crate::domain::LookupError;

/// An elected person as returned by the civic-information API.
///
/// All sequences keep provider order: the first party is the primary
/// affiliation, the first phone/url is the preferred contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Official {
    name: String,
    parties: Vec<String>,
    phones: Vec<String>,
    urls: Vec<String>,
}

impl Official {
    pub fn new(
        name: String,
        parties: Vec<String>,
        phones: Vec<String>,
        urls: Vec<String>,
    ) -> Self {
        Self {
            name,
            parties,
            phones,
            urls,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parties(&self) -> &[String] {
        &self.parties
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn primary_party(&self) -> Option<&str> {
        self.parties.first().map(String::as_str)
    }

    /// Renders `"<name> [<primary party>] <first phone> <first url>"`.
    ///
    /// Fails with [`LookupError::MissingField`] instead of indexing past the
    /// end when the provider omitted a contact field.
    pub fn display_line(&self) -> Result<String, LookupError> {
        let party = self.parties.first().ok_or_else(|| {
            LookupError::missing_field(format!("official '{}' has no party affiliation", self.name))
        })?;
        let phone = self.phones.first().ok_or_else(|| {
            LookupError::missing_field(format!("official '{}' has no phone number", self.name))
        })?;
        let url = self.urls.first().ok_or_else(|| {
            LookupError::missing_field(format!("official '{}' has no url", self.name))
        })?;

        Ok(format!("{} [{}] {} {}", self.name, party, phone, url))
    }
}

/// A governmental position tying office metadata to entries in the officials
/// list of the same response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    name: String,
    official_indices: Vec<usize>,
}

impl Office {
    pub fn new(name: String, official_indices: Vec<usize>) -> Self {
        Self {
            name,
            official_indices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn official_indices(&self) -> &[usize] {
        &self.official_indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn senator() -> Official {
        Official::new(
            "Alex Padilla".to_string(),
            vec!["Democratic Party".to_string()],
            vec!["(202) 224-3553".to_string()],
            vec!["https://www.padilla.senate.gov".to_string()],
        )
    }

    #[test]
    fn test_display_line_format() {
        let line = senator().display_line().unwrap();

        assert_eq!(
            line,
            "Alex Padilla [Democratic Party] (202) 224-3553 https://www.padilla.senate.gov"
        );
    }

    #[test]
    fn test_display_line_fails_on_empty_phones() {
        let official = Official::new(
            "Alex Padilla".to_string(),
            vec!["Democratic Party".to_string()],
            vec![],
            vec!["https://www.padilla.senate.gov".to_string()],
        );

        let err = official.display_line().unwrap_err();
        assert!(matches!(err, LookupError::MissingField(_)));
    }

    #[test]
    fn test_display_line_fails_on_empty_urls() {
        let official = Official::new(
            "Alex Padilla".to_string(),
            vec!["Democratic Party".to_string()],
            vec!["(202) 224-3553".to_string()],
            vec![],
        );

        let err = official.display_line().unwrap_err();
        assert!(matches!(err, LookupError::MissingField(_)));
    }

    #[test]
    fn test_primary_party_is_first_entry() {
        let official = Official::new(
            "Joe Manchin".to_string(),
            vec!["Independent".to_string(), "Democratic Party".to_string()],
            vec![],
            vec![],
        );

        assert_eq!(official.primary_party(), Some("Independent"));
    }
}
