//! Conversions between SDK models and generated proto messages.

use crate::models::User;
use crate::proto;

impl From<User> for proto::User {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            password: u.password,
        }
    }
}

impl From<proto::User> for User {
    fn from(u: proto::User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            password: u.password,
        }
    }
}
