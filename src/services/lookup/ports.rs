use async_trait::async_trait;

use crate::{
    services::geocoding_client::{
        geocoding_service::ResolvedLocation, types::geocoding_service_error::GeocodingServiceError,
    },
    types::{
        coordinate::Coordinate,
        restaurant_record::{RestaurantRecord, RestaurantSource},
        search_query::SearchQuery,
    },
};

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for `location_text`, or `None` when nothing matched.
    async fn resolve(
        &self,
        location_text: &str,
    ) -> Result<Option<ResolvedLocation>, GeocodingServiceError>;
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Display address for `coordinate`, `None` if the service knows none.
    async fn reverse(&self, coordinate: Coordinate)
        -> Result<Option<String>, GeocodingServiceError>;
}

/// One restaurant data source. Implementations swallow their own failures:
/// a broken source is reported as `None` so the caller can fall back.
#[async_trait]
pub trait RestaurantFinder: Send + Sync {
    fn source(&self) -> RestaurantSource;

    async fn find_restaurant(&self, query: &SearchQuery) -> Option<RestaurantRecord>;
}
