use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::types::mapbox_places_response::{MapboxFeature, MapboxPlacesResponse};
use crate::{
    services::lookup::{
        ports::RestaurantFinder,
        random_index::{pick_random, RandomIndex},
        types::place_source_error::PlaceSourceError,
    },
    types::{
        coordinate::Coordinate,
        restaurant_record::{Amenities, RestaurantRecord, RestaurantSource},
        search_query::SearchQuery,
    },
};

const PROVIDER: &str = "Mapbox";

#[derive(Clone)]
pub struct MapboxServiceConfig {
    pub api_key: String,
    pub host: String,
}

/// Primary restaurant source backed by the Mapbox places index.
#[derive(Clone)]
pub struct MapboxService {
    config: MapboxServiceConfig,
    client: reqwest::Client,
    random: Arc<dyn RandomIndex>,
}

fn feature_coordinate(feature: &MapboxFeature) -> Coordinate {
    let [lon, lat] = feature.center;
    Coordinate::new(lat, lon)
}

fn feature_to_record(feature: &MapboxFeature) -> RestaurantRecord {
    let properties = &feature.properties;

    let phone = feature
        .context
        .iter()
        .find(|c| c.id.starts_with("phone"))
        .map(|c| c.text.clone())
        .or_else(|| properties.tel.clone());

    let categories: Vec<String> = properties
        .category
        .as_deref()
        .map(|c| {
            c.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    RestaurantRecord::new(
        RestaurantSource::Primary,
        feature.text.clone(),
        feature_coordinate(feature),
    )
    .with_address(feature.place_name.clone())
    .with_categories(categories)
    .with_amenities(Amenities {
        phone,
        website: properties.website.clone(),
        cuisine: properties.category.clone(),
        ..Amenities::default()
    })
}

impl MapboxService {
    pub fn new(
        config: MapboxServiceConfig,
        client: reqwest::Client,
        random: Arc<dyn RandomIndex>,
    ) -> Self {
        Self {
            config,
            client,
            random,
        }
    }

    /// Restaurant POIs near the query point. The endpoint only biases results
    /// towards `proximity`, so features outside the radius are dropped here.
    pub async fn find_candidates(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<MapboxFeature>, PlaceSourceError> {
        let url = format!(
            "{}/geocoding/v5/mapbox.places/restaurant.json",
            self.config.host
        );
        let proximity = format!(
            "{},{}",
            query.coordinate.longitude(),
            query.coordinate.latitude()
        );
        let radius = query.radius_meters().to_string();

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("proximity", proximity.as_str()),
                ("radius", radius.as_str()),
                ("types", "poi"),
                ("access_token", self.config.api_key.as_str()),
            ])
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
            .json::<MapboxPlacesResponse>()
            .await
            .map_err(PlaceSourceError::transport(PROVIDER))?;

        Ok(body
            .features
            .into_iter()
            .filter(|f| query.contains(&feature_coordinate(f)))
            .collect())
    }

    async fn lookup(
        &self,
        query: &SearchQuery,
    ) -> Result<Option<RestaurantRecord>, PlaceSourceError> {
        let candidates = self.find_candidates(query).await?;
        debug!("{} returned {} candidates", PROVIDER, candidates.len());

        Ok(pick_random(self.random.as_ref(), &candidates).map(feature_to_record))
    }
}

#[async_trait]
impl RestaurantFinder for MapboxService {
    fn source(&self) -> RestaurantSource {
        RestaurantSource::Primary
    }

    async fn find_restaurant(&self, query: &SearchQuery) -> Option<RestaurantRecord> {
        self.lookup(query).await.unwrap_or_else(|e| {
            error!("Error in Mapbox lookup: {}", e);
            None
        })
    }
}
