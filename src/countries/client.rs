// Data loader - fetches the country dataset from the REST Countries API
//
// One GET per load cycle, with an explicit field projection so the
// endpoint only serves what the directory renders. The response is
// sorted before it is handed to the application; a failed load leaves
// the caller's previous master list untouched.

use super::models::Country;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Fields requested from the endpoint. Keeping the projection explicit
/// bounds payload size and pins the record shape we deserialize.
pub const FIELD_PROJECTION: &str = "name,flags,flag,cca3,region,capital,population,maps,currencies";

/// Failure modes for a load cycle.
///
/// Terminal for the session until a manual reload: the UI degrades to a
/// static error panel, nothing is retried automatically.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Connect, send, or timeout failure before a response arrived
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("unexpected status {0} from country endpoint")]
    Status(StatusCode),

    /// The body was not a decodable country array
    #[error("could not decode country payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the country endpoint
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
}

impl Client {
    /// Build a client against the given endpoint.
    ///
    /// The request timeout keeps a hung endpoint from leaving the UI in
    /// a permanent loading state; expiry surfaces as `LoadError::Http`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LoadError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("terradex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Fetch, decode, and sort the full country list.
    pub async fn load_all(&self) -> Result<Vec<Country>, LoadError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching country dataset");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("fields", FIELD_PROJECTION)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let mut countries: Vec<Country> =
            response.json().await.map_err(LoadError::Decode)?;

        super::normalize(&mut countries);
        tracing::info!(count = countries.len(), "country dataset loaded");

        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payload_array() {
        // Shape as served by /v3.1/all?fields=... (abridged)
        let body = r#"[
            {"name": {"common": "United States"}, "cca3": "USA", "region": "Americas",
             "capital": ["Washington, D.C."], "population": 329484123,
             "currencies": {"USD": {"name": "United States dollar"}}},
            {"name": {"common": "France"}, "cca3": "FRA", "region": "Europe",
             "capital": ["Paris"], "population": 67391582,
             "currencies": {"EUR": {"name": "Euro"}}}
        ]"#;

        let mut countries: Vec<Country> = serde_json::from_str(body).unwrap();
        crate::countries::normalize(&mut countries);

        assert_eq!(countries.len(), 2);
        // Sorted ascending by common name after normalization
        assert_eq!(countries[0].cca3, "FRA");
        assert_eq!(countries[1].cca3, "USA");
    }

    #[test]
    fn rejects_malformed_payload() {
        let body = r#"{"message": "rate limited"}"#;
        let parsed: Result<Vec<Country>, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }
}
