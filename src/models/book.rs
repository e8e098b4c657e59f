//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    pub owner_user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Create/update request for a book.
///
/// The same payload shape serves both operations; the owner is never part
/// of it, so an update cannot reassign a book to another user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: String,
    #[validate(length(min = 1, max = 100, message = "Genre must be between 1 and 100 characters"))]
    pub genre: String,
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,
}
