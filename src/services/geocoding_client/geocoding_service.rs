use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use urlencoding::encode;

use super::types::{
    geocoding_service_error::GeocodingServiceError,
    nominatim_reverse_response::NominatimReverseResponse,
    nominatim_search_response::NominatimSearchResponse,
};
use crate::{
    services::lookup::ports::{Geocoder, ReverseGeocoder},
    types::coordinate::Coordinate,
};

pub const DEFAULT_USER_AGENT: &str = "RandomRestaurantPicker/1.0";

#[derive(Clone)]
pub struct GeocodingServiceConfig {
    pub host: String,
    pub user_agent: String,
}

#[derive(Clone)]
pub struct GeocodingService {
    config: GeocodingServiceConfig,
    client: reqwest::Client,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    pub display_name: String,
}

impl GeocodingService {
    pub fn new(config: GeocodingServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, GeocodingServiceError> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(GeocodingServiceError::Status(resp.status()));
        }

        Ok(resp)
    }
}

fn parse_degrees(value: &str, field: &str) -> Result<f64, GeocodingServiceError> {
    let degrees = value
        .trim()
        .parse::<f64>()
        .map_err(|e| GeocodingServiceError::Decode(format!("invalid {field} {value:?}: {e}")))?;

    if !degrees.is_finite() {
        return Err(GeocodingServiceError::Decode(format!(
            "non-finite {field} {value:?}"
        )));
    }

    Ok(degrees)
}

#[async_trait]
impl Geocoder for GeocodingService {
    async fn resolve(
        &self,
        location_text: &str,
    ) -> Result<Option<ResolvedLocation>, GeocodingServiceError> {
        let url = format!(
            "{}/search?format=json&q={}",
            self.config.host,
            encode(location_text)
        );

        let body = self.get(&url).await?.json::<NominatimSearchResponse>().await?;

        let Some(best) = body.into_iter().next() else {
            debug!("No geocoding match for {:?}", location_text);
            return Ok(None);
        };

        let coordinate = Coordinate::new(
            parse_degrees(&best.lat, "latitude")?,
            parse_degrees(&best.lon, "longitude")?,
        );

        Ok(Some(ResolvedLocation {
            coordinate,
            display_name: best.display_name,
        }))
    }
}

#[async_trait]
impl ReverseGeocoder for GeocodingService {
    async fn reverse(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<String>, GeocodingServiceError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=18&addressdetails=1",
            self.config.host,
            coordinate.latitude(),
            coordinate.longitude()
        );

        let body = self.get(&url).await?.json::<NominatimReverseResponse>().await?;

        if let Some(error) = body.error {
            warn!("Reverse geocoding returned no address: {}", error);
        }

        Ok(body.display_name)
    }
}
