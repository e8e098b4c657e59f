//! Repository layer for database operations
//!
//! The storage ports are narrow traits so the services can be exercised
//! against mocks; the Postgres implementations live next to them.

pub mod books;
pub mod users;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use books::{BookStore, PgBookStore};
pub use users::{PgUserStore, UserStore};

/// Main repository struct holding database connection pool and stores
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: Arc<dyn UserStore>,
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            books: Arc::new(PgBookStore::new(pool.clone())),
            pool,
        }
    }
}
