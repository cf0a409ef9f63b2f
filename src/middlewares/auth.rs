use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{types::app_state::AppState, utils::app_error::AppError};

/// Rejects requests whose `authorization` header does not carry the
/// configured shared secret. Without a configured secret every request passes.
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(ref auth_key) = state.auth_key else {
        return Ok(next.run(request).await);
    };

    match headers.get(AUTHORIZATION) {
        Some(header) if header == auth_key.as_str() => Ok(next.run(request).await),
        _ => {
            warn!("Rejected request to {} without valid credentials", request.uri().path());
            Err(AppError::new(StatusCode::UNAUTHORIZED, "Unauthorized"))
        }
    }
}
