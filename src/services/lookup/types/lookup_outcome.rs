use thiserror::Error;

use crate::{
    services::geocoding_client::{
        geocoding_service::ResolvedLocation, types::geocoding_service_error::GeocodingServiceError,
    },
    types::restaurant_record::RestaurantRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    LocationNotFound,
    NoRestaurantsFound,
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NotFoundReason::LocationNotFound => write!(f, "Location not found"),
            NotFoundReason::NoRestaurantsFound => write!(f, "No restaurants found in this area"),
        }
    }
}

/// Expected results of a pick. Empty results are not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found {
        location: ResolvedLocation,
        restaurant: RestaurantRecord,
    },
    NotFound(NotFoundReason),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid lookup input: {0}")]
    InvalidInput(&'static str),

    #[error("Failed to resolve location: {0}")]
    Geocoding(#[from] GeocodingServiceError),
}
