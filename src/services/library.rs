//! Library service: ownership-scoped book CRUD

use std::sync::Arc;

use validator::Validate;

use crate::{
    config::LibraryConfig,
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::{BookStore, UserStore},
};

#[derive(Clone)]
pub struct LibraryService {
    books: Arc<dyn BookStore>,
    users: Arc<dyn UserStore>,
    config: LibraryConfig,
}

impl LibraryService {
    pub fn new(books: Arc<dyn BookStore>, users: Arc<dyn UserStore>, config: LibraryConfig) -> Self {
        Self { books, users, config }
    }

    /// List all books belonging to the given owner.
    ///
    /// With `empty_shelf_as_not_found` set (the default), an empty library
    /// is reported as 404 rather than 200 with an empty array, matching the
    /// original backend's behavior.
    pub async fn list_books(&self, owner_user_id: i32) -> AppResult<Vec<Book>> {
        let books = self.books.list_by_owner(owner_user_id).await?;

        if books.is_empty() && self.config.empty_shelf_as_not_found {
            return Err(AppError::NotFound(
                "The user has no registered books".to_string(),
            ));
        }

        Ok(books)
    }

    /// Get a single book by id, scoped to its owner.
    ///
    /// A book that exists under a different owner resolves to the same
    /// NotFound as a nonexistent id, so cross-tenant existence is never
    /// revealed.
    pub async fn get_book(&self, owner_user_id: i32, book_id: i32) -> AppResult<Book> {
        Self::check_ids(owner_user_id, book_id)?;

        self.books
            .find_by_id_and_owner(book_id, owner_user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No book with id {} found for user {}",
                    book_id, owner_user_id
                ))
            })
    }

    /// Add a book to the given owner's library
    pub async fn add_book(&self, owner_user_id: i32, payload: BookPayload) -> AppResult<Book> {
        if owner_user_id <= 0 {
            return Err(AppError::Validation("Invalid user id".to_string()));
        }
        payload.validate()?;

        if !self.users.exists(owner_user_id).await? {
            return Err(AppError::NotFound(format!(
                "No user found with id {}",
                owner_user_id
            )));
        }

        let book = self.books.insert(owner_user_id, &payload).await?;

        tracing::info!(
            "Book added: {} - {} for user {}",
            book.id,
            book.title,
            owner_user_id
        );

        Ok(book)
    }

    /// Overwrite a book's title, author, genre and description in place.
    /// The owner is never reassigned through this call.
    pub async fn update_book(
        &self,
        owner_user_id: i32,
        book_id: i32,
        payload: BookPayload,
    ) -> AppResult<Book> {
        Self::check_ids(owner_user_id, book_id)?;
        payload.validate()?;

        let book = self
            .books
            .update_fields(book_id, owner_user_id, &payload)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No book with id {} found for user {}",
                    book_id, owner_user_id
                ))
            })?;

        tracing::info!(
            "Book updated: {} - {} for user {}",
            book.id,
            book.title,
            owner_user_id
        );

        Ok(book)
    }

    /// Delete a book by id, scoped to its owner. Returns the deleted book
    /// so the handler can reference its title in the confirmation.
    pub async fn delete_book(&self, owner_user_id: i32, book_id: i32) -> AppResult<Book> {
        let book = self.get_book(owner_user_id, book_id).await?;

        self.books.delete(book_id, owner_user_id).await?;

        tracing::info!(
            "Book deleted: {} - {} for user {}",
            book.id,
            book.title,
            owner_user_id
        );

        Ok(book)
    }

    fn check_ids(owner_user_id: i32, book_id: i32) -> AppResult<()> {
        if owner_user_id <= 0 || book_id <= 0 {
            return Err(AppError::Validation("Invalid ids".to_string()));
        }
        Ok(())
    }
}
