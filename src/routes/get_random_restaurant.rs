use crate::{
    services::{
        geocoding_client::geocoding_service::ResolvedLocation,
        lookup::types::lookup_outcome::{LookupError, LookupOutcome},
    },
    types::{app_state::AppState, restaurant_record::RestaurantRecord},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

const DEFAULT_RADIUS_METERS: u32 = 1000;

fn default_radius() -> u32 {
    DEFAULT_RADIUS_METERS
}

#[derive(Validate, Deserialize)]
pub struct GetRandomRestaurantPayload {
    pub location: String,

    #[serde(default = "default_radius")]
    #[validate(range(min = 1, max = 50000, message = "Must be between 1 and 50000 meters"))]
    pub radius: u32,
}

#[derive(Serialize, Deserialize)]
pub struct GetRandomRestaurantResponseData {
    pub location: ResolvedLocation,
    pub restaurant: RestaurantRecord,
}

#[derive(Serialize, Deserialize)]
pub struct GetRandomRestaurantResponse {
    pub data: GetRandomRestaurantResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_random_restaurant(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetRandomRestaurantPayload>,
) -> Result<Response, AppError> {
    let location = payload.location.trim();
    if location.is_empty() {
        return Err(AppError::bad_request("Please enter a location"));
    }

    let outcome = state
        .lookup_service
        .pick_restaurant(location, payload.radius)
        .await
        .map_err(|e| match e {
            LookupError::InvalidInput(message) => AppError::bad_request(message),
            LookupError::Geocoding(e) => {
                error!("Failed to resolve location {:?}: {}", location, e);
                AppError::new(StatusCode::BAD_GATEWAY, "Failed to resolve location")
            }
        })?;

    match outcome {
        LookupOutcome::Found {
            location,
            restaurant,
        } => {
            info!(
                "Picked {:?} from {}, {:.0} m from {:?}",
                restaurant.name,
                restaurant.source(),
                restaurant.coordinate().distance_meters(&location.coordinate),
                location.display_name
            );

            Ok((
                StatusCode::OK,
                Json(GetRandomRestaurantResponse {
                    data: GetRandomRestaurantResponseData {
                        location,
                        restaurant,
                    },
                }),
            )
                .into_response())
        }
        LookupOutcome::NotFound(reason) => {
            Err(AppError::new(StatusCode::NOT_FOUND, reason.to_string()))
        }
    }
}
