//! Domain service for users
//!
//! Validates input, assigns identifiers and orchestrates the repository.
//! Failures coming from the repository are propagated unchanged.

use std::sync::Arc;

use users_sdk::{User, UserRequest};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;
use crate::domain::validation::{require_id, validate_user_request};

/// Domain service that owns user business rules.
///
/// Stateless apart from the injected repository; cheap to share behind an `Arc`.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    /// Validate, assign a fresh UUID v4 and persist a new user.
    ///
    /// # Errors
    /// `Validation` before touching storage, `Storage` if the insert fails.
    pub async fn create_user(&self, req: UserRequest) -> Result<User, DomainError> {
        tracing::info!("Creating new user");

        validate_user_request(&req)?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: req.email,
            password: req.password,
        };

        self.repo.create(&user).await?;

        tracing::info!(id = %user.id, "Successfully created user");
        Ok(user)
    }

    /// # Errors
    /// `Validation` for an empty id, otherwise whatever the repository reports.
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, DomainError> {
        tracing::debug!(%id, "Getting user by id");
        require_id(id)?;
        self.repo.get_by_id(id).await
    }

    /// # Errors
    /// `Storage` if the repository fails.
    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        tracing::debug!("Listing users");
        let users = self.repo.list_all().await?;
        tracing::debug!(count = users.len(), "Successfully listed users");
        Ok(users)
    }

    /// Replace email and password of the user with `id`.
    ///
    /// # Errors
    /// `Validation` for an empty id or a bad request, `NotFound` if the user
    /// does not exist, `Storage` if the update fails.
    pub async fn update_user(&self, id: &str, req: UserRequest) -> Result<User, DomainError> {
        tracing::info!(%id, "Updating user");

        require_id(id)?;
        validate_user_request(&req)?;

        let user = User {
            id: id.to_owned(),
            email: req.email,
            password: req.password,
        };

        self.repo.update(&user).await?;

        tracing::info!(%id, "Successfully updated user");
        Ok(user)
    }

    /// Delete the user with `id`.
    ///
    /// # Errors
    /// `Validation` for an empty id, `NotFound` if nothing was deleted,
    /// `Storage` if the delete fails.
    pub async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        tracing::info!(%id, "Deleting user");

        require_id(id)?;

        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found(id));
        }

        tracing::info!(%id, "Successfully deleted user");
        Ok(())
    }
}
