use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_random_restaurant;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/random-restaurant",
        get(get_random_restaurant::get_random_restaurant),
    )
}
