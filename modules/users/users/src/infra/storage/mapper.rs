use sea_orm::Set;
use users_sdk::User;

use super::entity;

impl From<entity::Model> for User {
    fn from(m: entity::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            password: m.password,
        }
    }
}

impl From<&User> for entity::ActiveModel {
    fn from(u: &User) -> Self {
        Self {
            id: Set(u.id.clone()),
            email: Set(u.email.clone()),
            password: Set(u.password.clone()),
        }
    }
}
