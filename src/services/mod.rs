//! Business logic services

pub mod credentials;
pub mod library;

use sqlx::{Pool, Postgres};

use crate::{config::LibraryConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub credentials: credentials::CredentialsService,
    pub library: library::LibraryService,
    /// Kept for readiness probing
    pub pool: Pool<Postgres>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, library_config: LibraryConfig) -> Self {
        Self {
            credentials: credentials::CredentialsService::new(repository.users.clone()),
            library: library::LibraryService::new(
                repository.books.clone(),
                repository.users.clone(),
                library_config,
            ),
            pool: repository.pool,
        }
    }
}
