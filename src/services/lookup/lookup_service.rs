use std::{num::NonZeroU32, sync::Arc};

use tracing::{debug, info};

use super::{
    ports::{Geocoder, RestaurantFinder},
    sufficiency::is_sufficient,
    types::lookup_outcome::{LookupError, LookupOutcome, NotFoundReason},
};
use crate::types::search_query::SearchQuery;

/// Geocode, try the primary source, fall back to the secondary one.
///
/// Steps run strictly in sequence. The secondary source is consulted whenever
/// the primary one yields nothing or a record that fails [`is_sufficient`].
#[derive(Clone)]
pub struct LookupService {
    geocoder: Arc<dyn Geocoder>,
    primary: Arc<dyn RestaurantFinder>,
    secondary: Arc<dyn RestaurantFinder>,
}

impl LookupService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        primary: Arc<dyn RestaurantFinder>,
        secondary: Arc<dyn RestaurantFinder>,
    ) -> Self {
        Self {
            geocoder,
            primary,
            secondary,
        }
    }

    pub async fn pick_restaurant(
        &self,
        location_text: &str,
        radius_meters: u32,
    ) -> Result<LookupOutcome, LookupError> {
        let location_text = location_text.trim();
        if location_text.is_empty() {
            return Err(LookupError::InvalidInput("location must not be empty"));
        }
        let Some(radius_meters) = NonZeroU32::new(radius_meters) else {
            return Err(LookupError::InvalidInput("radius must be positive"));
        };

        let Some(location) = self.geocoder.resolve(location_text).await? else {
            info!("Location not found: {:?}", location_text);
            return Ok(LookupOutcome::NotFound(NotFoundReason::LocationNotFound));
        };

        let query = SearchQuery::new(location.coordinate, radius_meters);

        if let Some(restaurant) = self.primary.find_restaurant(&query).await {
            if is_sufficient(&restaurant) {
                info!("Using {} data", self.primary.source());
                return Ok(LookupOutcome::Found {
                    location,
                    restaurant,
                });
            }
            debug!(
                "{} result {:?} is too sparse, falling back",
                self.primary.source(),
                restaurant.name
            );
        }

        info!("Using {} data", self.secondary.source());
        match self.secondary.find_restaurant(&query).await {
            Some(restaurant) => Ok(LookupOutcome::Found {
                location,
                restaurant,
            }),
            None => Ok(LookupOutcome::NotFound(NotFoundReason::NoRestaurantsFound)),
        }
    }
}
