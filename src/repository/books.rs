//! Books storage port and Postgres implementation

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
};

/// Storage port for book rows. Every lookup and mutation is scoped by the
/// owning user's id; there is no way to reach a book through this port
/// without naming its owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// List all books belonging to the given owner
    async fn list_by_owner(&self, owner_user_id: i32) -> AppResult<Vec<Book>>;

    /// Find a book by id and owner; cross-owner lookups resolve to `None`
    async fn find_by_id_and_owner(&self, id: i32, owner_user_id: i32) -> AppResult<Option<Book>>;

    /// Insert a new book for the given owner and return the stored row
    async fn insert(&self, owner_user_id: i32, payload: &BookPayload) -> AppResult<Book>;

    /// Overwrite the mutable fields of a book in place; the owner column
    /// is never touched. Returns `None` if no id+owner pair matches.
    async fn update_fields(
        &self,
        id: i32,
        owner_user_id: i32,
        payload: &BookPayload,
    ) -> AppResult<Option<Book>>;

    /// Delete a book by id and owner
    async fn delete(&self, id: i32, owner_user_id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list_by_owner(&self, owner_user_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE owner_user_id = $1",
        )
        .bind(owner_user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn find_by_id_and_owner(&self, id: i32, owner_user_id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE id = $1 AND owner_user_id = $2",
        )
        .bind(id)
        .bind(owner_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn insert(&self, owner_user_id: i32, payload: &BookPayload) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, description, owner_user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(&payload.genre)
        .bind(&payload.description)
        .bind(owner_user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn update_fields(
        &self,
        id: i32,
        owner_user_id: i32,
        payload: &BookPayload,
    ) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, description = $4
            WHERE id = $5 AND owner_user_id = $6
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(&payload.genre)
        .bind(&payload.description)
        .bind(id)
        .bind(owner_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn delete(&self, id: i32, owner_user_id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1 AND owner_user_id = $2")
            .bind(id)
            .bind(owner_user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
