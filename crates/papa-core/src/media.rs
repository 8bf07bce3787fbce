use crate::config::MediaConfig;
use crate::error::{PapaError, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MediaHit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaHit {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MediaHit>,
}

// ---------------------------------------------------------------------------
// MediaClient
// ---------------------------------------------------------------------------

/// Keyword lookup against the media endpoint. "No result" is a normal
/// `Ok(None)`; transport and server errors are returned so call sites can
/// degrade to the placeholder.
pub struct MediaClient {
    endpoint: String,
    api_key: Option<String>,
    http: reqwest::blocking::Client,
}

impl MediaClient {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn search(&self, keyword: &str) -> Result<Option<MediaHit>> {
        let mut request = self
            .http
            .get(&self.endpoint)
            .query(&[("q", keyword), ("limit", "1")]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key.as_str())]);
        }

        let response = request
            .send()
            .map_err(|e| PapaError::Media(e.to_string()))?;
        if !response.status().is_success() {
            return Err(PapaError::Media(format!(
                "endpoint returned {}",
                response.status()
            )));
        }
        let body: SearchResponse = response
            .json()
            .map_err(|e| PapaError::Media(e.to_string()))?;
        Ok(body.results.into_iter().next())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
