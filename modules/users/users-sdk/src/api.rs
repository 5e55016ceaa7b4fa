//! Users API trait and types
//!
//! Contract trait and error type for the users service.

use async_trait::async_trait;

use crate::models::{User, UserRequest};

/// Users API trait
///
/// Mirrors the five operations of `users.v1.UserService`.
#[async_trait]
pub trait UsersClient: Send + Sync {
    /// Create a user; the service assigns the id.
    async fn create_user(&self, req: UserRequest) -> Result<User, UsersError>;

    /// Fetch a single user by id.
    async fn get_user(&self, id: &str) -> Result<User, UsersError>;

    /// List all users. An empty store yields an empty vector.
    async fn list_users(&self) -> Result<Vec<User>, UsersError>;

    /// Replace email and password of an existing user.
    async fn update_user(&self, id: &str, req: UserRequest) -> Result<User, UsersError>;

    /// Delete a user by id.
    async fn delete_user(&self, id: &str) -> Result<(), UsersError>;
}

/// Error type for users operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("gRPC transport error: {0}")]
    Transport(String),
}

impl From<tonic::Status> for UsersError {
    fn from(status: tonic::Status) -> Self {
        let message = status.message().to_owned();
        match status.code() {
            tonic::Code::InvalidArgument => Self::Validation(message),
            tonic::Code::NotFound => Self::NotFound(message),
            tonic::Code::Internal => Self::Internal(message),
            _ => Self::Transport(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_error_kinds() {
        assert_eq!(
            UsersError::from(tonic::Status::invalid_argument("bad email")),
            UsersError::Validation("bad email".to_owned())
        );
        assert_eq!(
            UsersError::from(tonic::Status::not_found("gone")),
            UsersError::NotFound("gone".to_owned())
        );
        assert_eq!(
            UsersError::from(tonic::Status::internal("db down")),
            UsersError::Internal("db down".to_owned())
        );
        assert!(matches!(
            UsersError::from(tonic::Status::unavailable("connection refused")),
            UsersError::Transport(_)
        ));
    }
}
