use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::app_error::AppError;

/// `Query<T>` that also runs `T`'s validation rules.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(format!("Invalid query: {}", e.body_text())))?;

        data.validate()
            .map_err(|e| AppError::bad_request(format!("Invalid query: {}", e)))?;

        Ok(ValidatedQuery(data))
    }
}
