//! API handlers for the VirtualBook REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Generic confirmation body: `{ "message": ... }`
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
struct OwnerParams {
    user_id: i32,
}

/// Resolves the owner identity for a request.
///
/// The owner id is read from the `user_id` path segment; there is no
/// session or token involved, so any caller can present any id. That is
/// the documented behavior of the original backend, kept as-is. Swapping
/// in real authentication later only means replacing this extractor; the
/// library service's ownership logic stays untouched.
pub struct Identity(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<OwnerParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation("Invalid user id".to_string()))?;

        Ok(Identity(params.user_id))
    }
}

/// JSON extractor whose rejection is an [`AppError`], so a missing or
/// malformed body still produces the `{ "message": ... }` error shape.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(ValidJson(value))
    }
}
