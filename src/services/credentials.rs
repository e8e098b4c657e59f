//! Credential service: registration and login

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginUser, RegisterUser, User, UserResponse, UserSummary},
    repository::UserStore,
};

#[derive(Clone)]
pub struct CredentialsService {
    users: Arc<dyn UserStore>,
}

impl CredentialsService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register a new user with a hashed password.
    ///
    /// The response never contains the hash, and the plaintext password is
    /// dropped as soon as it has been hashed.
    pub async fn register(&self, data: RegisterUser) -> AppResult<UserResponse> {
        data.validate()?;

        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::DuplicateEmail(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = self.hash_password(&data.password)?;
        let user = self
            .users
            .insert(&data.name, &data.email, &password_hash)
            .await?;

        tracing::info!("User registered: {}", user.email);

        Ok(UserResponse::from(&user))
    }

    /// Verify login credentials and return the user's public data.
    ///
    /// No session token or cookie is issued; callers reuse the returned id
    /// as the ownership key on subsequent requests.
    pub async fn login(&self, data: LoginUser) -> AppResult<UserResponse> {
        if data.email.is_empty() || data.password.is_empty() {
            return Err(AppError::Validation(
                "Email and password must be provided".to_string(),
            ));
        }

        let user = self
            .users
            .find_by_email(&data.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !self.verify_password(&user, &data.password)? {
            return Err(AppError::InvalidCredentials(
                "Incorrect password".to_string(),
            ));
        }

        tracing::info!("User logged in: {}", user.email);

        Ok(UserResponse::from(&user))
    }

    /// List all users as name/email summaries
    pub async fn list_users(&self) -> AppResult<Vec<UserSummary>> {
        self.users.list().await
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against a user's stored hash
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
