//! User endpoints: listing, registration, login, logout

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::user::{LoginUser, RegisterUser, UserResponse, UserSummary},
};

use super::{MessageResponse, ValidJson};

/// Login response: confirmation message plus the user's public data.
/// The id in here is what callers present as the ownership key on the
/// book endpoints.
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
}

/// List all users (name and email only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserSummary>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = state.services.credentials.list_users().await?;
    Ok(Json(users))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/registro",
    tag = "users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid input or email already registered", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    ValidJson(data): ValidJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.services.credentials.register(data).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Log a user in. No session artifact is issued; the response carries the
/// user's id for the caller to reuse.
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginUser,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 401, description = "Incorrect password", body = ErrorResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    ValidJson(data): ValidJson<LoginUser>,
) -> AppResult<Json<LoginResponse>> {
    let user = state.services.credentials.login(data).await?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
    }))
}

/// Log out. There is no server-side session state to clear, so this is a
/// pure acknowledgement.
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = "users",
    responses(
        (status = 200, description = "Session closed", body = MessageResponse)
    )
)]
pub async fn logout() -> Json<MessageResponse> {
    tracing::info!("User logged out");
    Json(MessageResponse {
        message: "Session closed successfully".to_string(),
    })
}
