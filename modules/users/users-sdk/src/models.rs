//! Public models for the users module.
//!
//! These are transport-agnostic data structures shared by the service,
//! its storage layer and its consumers.

use std::fmt;

/// A user account.
///
/// `password` is held and stored as plaintext. No hashing happens anywhere in
/// the service; treat every `User` value as sensitive.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Inbound data for creating or replacing a user.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct UserRequest {
    pub email: String,
    pub password: String,
}

impl UserRequest {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for UserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
