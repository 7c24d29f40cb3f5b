//! DuckDuckGo autocomplete client.

use super::AutocompleteSource;
use crate::Result;
use serde::Deserialize;
use std::time::Duration;

const ENDPOINT: &str = "https://duckduckgo.com/ac/";
const TIMEOUT: Duration = Duration::from_secs(10);

/// Autocomplete backed by the DuckDuckGo `ac` endpoint.
#[derive(Debug, Clone)]
pub struct DdgAutocomplete {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct AcEntry {
    phrase: String,
}

impl DdgAutocomplete {
    /// Build the client with a bounded request timeout. A timed-out request
    /// surfaces as an error and the provider treats it as "no results".
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self { client })
    }
}

impl AutocompleteSource for DdgAutocomplete {
    async fn complete(&self, search: &str) -> Result<Vec<String>> {
        let entries: Vec<AcEntry> = self
            .client
            .get(ENDPOINT)
            .query(&[("q", search)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(entries.into_iter().map(|entry| entry.phrase).collect())
    }
}
