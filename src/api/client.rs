//! PokeAPI client
//!
//! Thin HTTP client for fetching JSON from the PokeAPI. Every failure is
//! logged once at the point of occurrence and propagated unchanged.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::ids::EntityId;

pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// PokeAPI client
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client against the public PokeAPI
    pub fn new() -> FetchResult<Self> {
        Self::with_base_url(POKEAPI_BASE)
    }

    /// Create a client against the given base URL (tests point this at a
    /// mock server)
    pub fn with_base_url(base_url: &str) -> FetchResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidInput(format!("invalid base URL {base_url}: {e}")))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the primary record for an id
    pub fn pokemon_url(&self, id: &EntityId) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    /// GET a URL and parse the body as JSON
    ///
    /// Non-success status and transport failures both surface as
    /// `FetchError`; a parse failure propagates as the same error kind.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "transport failure");
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let err = FetchError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            tracing::error!(url = %url, error = %err, "request failed");
            return Err(err);
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "failed to read response body");
            FetchError::Transport(e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(url = %url, error = %e, "failed to parse response");
            FetchError::Json {
                url: url.to_string(),
                source: e,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_url() {
        let client = PokeApiClient::new().unwrap();
        assert_eq!(
            client.pokemon_url(&EntityId::Number(25)),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
        assert_eq!(
            client.pokemon_url(&EntityId::Name("pikachu".to_string())),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PokeApiClient::with_base_url("http://localhost:9999/api/v2/").unwrap();
        assert_eq!(
            client.pokemon_url(&EntityId::Number(1)),
            "http://localhost:9999/api/v2/pokemon/1"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            PokeApiClient::with_base_url("not a url"),
            Err(FetchError::InvalidInput(_))
        ));
    }
}
