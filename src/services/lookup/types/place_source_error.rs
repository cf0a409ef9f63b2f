use thiserror::Error;

use crate::services::geocoding_client::types::geocoding_service_error::GeocodingServiceError;

#[derive(Debug, Error)]
pub enum PlaceSourceError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error: {status}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to fetch restaurant details: {0}")]
    Enrichment(#[from] GeocodingServiceError),
}

impl PlaceSourceError {
    /// Wraps a reqwest failure without its request URL, which may carry an
    /// access token.
    pub fn transport(provider: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| PlaceSourceError::Transport {
            provider,
            source: source.without_url(),
        }
    }
}
