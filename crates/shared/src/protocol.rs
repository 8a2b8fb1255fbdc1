use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{domain::Story, error::DomainError};

pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";
pub const SEARCH_TERM_KEY: &str = "search";
pub const DEFAULT_SEARCH_TERM: &str = "React";

/// Body of the search endpoint. Paging metadata is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
}

/// Fully assembled query URL: endpoint followed by the percent-encoded term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestTarget(String);

impl RequestTarget {
    pub fn new(endpoint: &str, term: &str) -> Self {
        let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
        Self(format!("{endpoint}{encoded}"))
    }

    /// Like [`RequestTarget::new`] but refuses an empty term, matching the disabled submit
    /// control. Whitespace is a real query and goes through.
    pub fn for_submit(endpoint: &str, term: &str) -> Result<Self, DomainError> {
        if term.is_empty() {
            return Err(DomainError::EmptySearchTerm);
        }
        Ok(Self::new(endpoint, term))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
