//! User service for signup, login, and preference management

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{
    validate_email, validate_name, validate_password, User, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub preferences: Vec<String>,
}

/// User service for account management and credential checks
#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user
    pub async fn signup(&self, request: SignupRequest) -> Result<User, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let email = request.email.to_lowercase();

        if self.repository.email_exists(&email).await? {
            return Err(DomainError::conflict(format!(
                "User with email '{}' already exists",
                email
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = User::new(request.name, email, password_hash, request.preferences);
        let user = self.repository.create(user).await?;

        info!(email = %user.email(), user_id = %user.id(), "User registered");

        Ok(user)
    }

    /// Check credentials for login.
    ///
    /// Unknown email and wrong password both return `None`; callers must not
    /// be able to tell which one happened.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.find_by_email(&email.to_lowercase()).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        info!(email = %user.email(), "User logged in");

        Ok(Some(user))
    }

    /// Look up a user by email (identity resolution for authenticated routes)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.repository.find_by_email(&email.to_lowercase()).await
    }

    /// Replace a user's stored preferences
    pub async fn update_preferences(
        &self,
        email: &str,
        preferences: Vec<String>,
    ) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", email)))?;

        user.set_preferences(preferences);
        let user = self.repository.save(&user).await?;

        info!(email = %user.email(), preferences = ?user.preferences(), "Preferences updated");

        Ok(user)
    }
}
