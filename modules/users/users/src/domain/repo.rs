use async_trait::async_trait;
use users_sdk::User;

use crate::domain::error::DomainError;

/// Port for the domain layer: persistence operations the service needs.
///
/// Any store offering create / read-all / read-by-id / update / delete keyed
/// by a string id can implement it. Implementations perform no retries and
/// no caching.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a fully-formed user. The service has already assigned the id.
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Return every stored user. No rows is an empty vector, not an error.
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Load a user by id, failing with `DomainError::NotFound` when absent.
    async fn get_by_id(&self, id: &str) -> Result<User, DomainError>;

    /// Replace the row whose id equals `user.id`.
    ///
    /// Fails with `DomainError::NotFound` if no such row exists.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
