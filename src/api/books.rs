//! Book endpoints: ownership-scoped CRUD

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, BookPayload},
};

use super::{Identity, MessageResponse, ValidJson};

#[derive(Deserialize)]
pub struct BookParams {
    book_id: i32,
}

/// List all books of one user
#[utoipa::path(
    get,
    path = "/books/user/{user_id}",
    tag = "books",
    params(
        ("user_id" = i32, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "The user's books", body = Vec<Book>),
        (status = 404, description = "The user has no registered books", body = ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Identity(owner_user_id): Identity,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.library.list_books(owner_user_id).await?;
    Ok(Json(books))
}

/// Get one book by id, scoped to its owner
#[utoipa::path(
    get,
    path = "/books/user/{user_id}/book/{book_id}",
    tag = "books",
    params(
        ("user_id" = i32, Path, description = "Owner user ID"),
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid ids", body = ErrorResponse),
        (status = 404, description = "No such book for this user", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Identity(owner_user_id): Identity,
    Path(params): Path<BookParams>,
) -> AppResult<Json<Book>> {
    let book = state
        .services
        .library
        .get_book(owner_user_id, params.book_id)
        .await?;
    Ok(Json(book))
}

/// Add a book to a user's library
#[utoipa::path(
    post,
    path = "/books/user/{user_id}/book",
    tag = "books",
    params(
        ("user_id" = i32, Path, description = "Owner user ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Owner does not exist", body = ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Identity(owner_user_id): Identity,
    ValidJson(payload): ValidJson<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state
        .services
        .library
        .add_book(owner_user_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book's title, author, genre and description
#[utoipa::path(
    put,
    path = "/books/user/{user_id}/book/{book_id}",
    tag = "books",
    params(
        ("user_id" = i32, Path, description = "Owner user ID"),
        ("book_id" = i32, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such book for this user", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Identity(owner_user_id): Identity,
    Path(params): Path<BookParams>,
    ValidJson(payload): ValidJson<BookPayload>,
) -> AppResult<Json<Book>> {
    let book = state
        .services
        .library
        .update_book(owner_user_id, params.book_id, payload)
        .await?;
    Ok(Json(book))
}

/// Delete a book from a user's library
#[utoipa::path(
    delete,
    path = "/books/user/{user_id}/book/{book_id}",
    tag = "books",
    params(
        ("user_id" = i32, Path, description = "Owner user ID"),
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Invalid ids", body = ErrorResponse),
        (status = 404, description = "No such book for this user", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Identity(owner_user_id): Identity,
    Path(params): Path<BookParams>,
) -> AppResult<Json<MessageResponse>> {
    let book = state
        .services
        .library
        .delete_book(owner_user_id, params.book_id)
        .await?;
    Ok(Json(MessageResponse {
        message: format!("The book '{}' has been deleted successfully.", book.title),
    }))
}
