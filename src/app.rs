use std::sync::Arc;

use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::{
        geocoding_client::geocoding_service::{
            GeocodingService, GeocodingServiceConfig, DEFAULT_USER_AGENT,
        },
        lookup::{
            detail_enricher::DetailEnricher,
            lookup_service::LookupService,
            random_index::{RandomIndex, ThreadRandomIndex},
        },
        mapbox_client::mapbox_service::{MapboxService, MapboxServiceConfig},
        overpass_client::overpass_service::{OverpassService, OverpassServiceConfig},
    },
    types::{app_config::AppConfig, app_state::AppState},
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

/// Wires the geocoder and both restaurant sources into one [`AppState`].
pub fn gen_state(config: &AppConfig) -> Result<AppState, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;
    let random: Arc<dyn RandomIndex> = Arc::new(ThreadRandomIndex);

    let geocoding_service = Arc::new(GeocodingService::new(
        GeocodingServiceConfig {
            host: config.nominatim_host.clone(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        },
        client.clone(),
    ));

    let mapbox_service = MapboxService::new(
        MapboxServiceConfig {
            api_key: config.mapbox_api_key.clone(),
            host: config.mapbox_host.clone(),
        },
        client.clone(),
        random.clone(),
    );

    let overpass_service = OverpassService::new(
        OverpassServiceConfig {
            host: config.overpass_host.clone(),
        },
        client,
        DetailEnricher::new(geocoding_service.clone()),
        random,
    );

    Ok(AppState {
        lookup_service: LookupService::new(
            geocoding_service,
            Arc::new(mapbox_service),
            Arc::new(overpass_service),
        ),
        auth_key: config.auth_key.clone(),
    })
}

pub fn gen_app(state: AppState) -> Router {
    let cors_middleware = CorsLayer::permissive();

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

// basic handler that responds with a static string
async fn root() -> &'static str {
    "Hello, World!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub nominatim_server: mockito::ServerGuard,
    pub mapbox_server: mockito::ServerGuard,
    pub overpass_server: mockito::ServerGuard,
}

#[cfg(test)]
fn mock_config(
    nominatim_host: String,
    mapbox_host: String,
    overpass_host: String,
    auth_key: Option<String>,
) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "debug".to_string(),
        mapbox_api_key: "pk.test".to_string(),
        mapbox_host,
        nominatim_host,
        overpass_host,
        auth_key,
        http_timeout_secs: 5,
    }
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let nominatim_server = mockito::Server::new_async().await;
    let mapbox_server = mockito::Server::new_async().await;
    let overpass_server = mockito::Server::new_async().await;

    let config = mock_config(
        nominatim_server.url(),
        mapbox_server.url(),
        overpass_server.url(),
        None,
    );

    MockApp {
        app: gen_app(gen_state(&config).unwrap()),
        nominatim_server,
        mapbox_server,
        overpass_server,
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn app_with_auth(auth_key: Option<&str>) -> Router {
        let config = mock_config(
            "http://127.0.0.1:9".to_string(),
            "http://127.0.0.1:9".to_string(),
            "http://127.0.0.1:9".to_string(),
            auth_key.map(str::to_string),
        );

        gen_app(gen_state(&config).unwrap())
    }

    #[tokio::test]
    async fn hello_world() {
        let app = app_with_auth(None);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_credentials_are_rejected() {
        let app = app_with_auth(Some("secret"));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn matching_credentials_pass() {
        let app = app_with_auth(Some("secret"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("authorization", "secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
