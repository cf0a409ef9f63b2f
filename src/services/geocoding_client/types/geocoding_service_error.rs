use thiserror::Error;

/// Failures talking to the forward/reverse geocoding service.
///
/// A geocoder that answers with zero matches is not an error; see
/// `GeocodingService::resolve`.
#[derive(Debug, Error)]
pub enum GeocodingServiceError {
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}
