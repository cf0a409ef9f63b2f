use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::types::overpass_response::{OverpassElement, OverpassResponse};
use crate::{
    services::lookup::{
        detail_enricher::DetailEnricher,
        ports::RestaurantFinder,
        random_index::{pick_random, RandomIndex},
        types::place_source_error::PlaceSourceError,
    },
    types::{
        restaurant_record::{RestaurantRecord, RestaurantSource},
        search_query::SearchQuery,
    },
};

const PROVIDER: &str = "OSM";
const AMENITIES: [&str; 3] = ["restaurant", "fast_food", "cafe"];

#[derive(Clone)]
pub struct OverpassServiceConfig {
    pub host: String,
}

/// Secondary restaurant source backed by an Overpass interpreter.
#[derive(Clone)]
pub struct OverpassService {
    config: OverpassServiceConfig,
    client: reqwest::Client,
    enricher: DetailEnricher,
    random: Arc<dyn RandomIndex>,
}

/// Overpass QL selecting eating places around the query point.
pub fn build_around_query(query: &SearchQuery) -> String {
    let around = format!(
        "(around:{},{},{})",
        query.radius_meters(),
        query.coordinate.latitude(),
        query.coordinate.longitude()
    );

    let nodes = AMENITIES
        .iter()
        .map(|amenity| format!("  node[\"amenity\"=\"{amenity}\"]{around};\n"))
        .collect::<String>();

    format!("[out:json][timeout:25];\n(\n{nodes});\nout body;\n>;\nout skel qt;\n")
}

impl OverpassService {
    pub fn new(
        config: OverpassServiceConfig,
        client: reqwest::Client,
        enricher: DetailEnricher,
        random: Arc<dyn RandomIndex>,
    ) -> Self {
        Self {
            config,
            client,
            enricher,
            random,
        }
    }

    /// Located nodes matching the query; elements without a position are
    /// skipped.
    pub async fn find_candidates(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<OverpassElement>, PlaceSourceError> {
        let url = format!("{}/api/interpreter", self.config.host);

        let resp = self
            .client
            .post(&url)
            .form(&[("data", build_around_query(query))])
            .send()
            .await
            .map_err(PlaceSourceError::transport(PROVIDER))?;

        if !resp.status().is_success() {
            return Err(PlaceSourceError::Status {
                provider: PROVIDER,
                status: resp.status(),
            });
        }

        let body = resp
            .json::<OverpassResponse>()
            .await
            .map_err(PlaceSourceError::transport(PROVIDER))?;

        Ok(body
            .elements
            .into_iter()
            .filter(|e| e.coordinate().is_some())
            .collect())
    }

    async fn lookup(
        &self,
        query: &SearchQuery,
    ) -> Result<Option<RestaurantRecord>, PlaceSourceError> {
        let candidates = self.find_candidates(query).await?;
        debug!("{} returned {} candidates", PROVIDER, candidates.len());

        let Some(node) = pick_random(self.random.as_ref(), &candidates) else {
            return Ok(None);
        };
        Ok(self.enricher.enrich(node).await?)
    }
}

#[async_trait]
impl RestaurantFinder for OverpassService {
    fn source(&self) -> RestaurantSource {
        RestaurantSource::Secondary
    }

    async fn find_restaurant(&self, query: &SearchQuery) -> Option<RestaurantRecord> {
        self.lookup(query).await.unwrap_or_else(|e| {
            error!("Error in OpenStreetMap lookup: {}", e);
            None
        })
    }
}
