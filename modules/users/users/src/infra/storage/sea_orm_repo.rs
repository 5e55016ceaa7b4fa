use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use users_sdk::User;

use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;
use crate::infra::storage::db::db_err;

use super::entity::{self, Column, Entity as UserEntity};

/// ORM-based implementation of the `UsersRepository` trait.
#[derive(Clone)]
pub struct SeaOrmUsersRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        UserEntity::insert(entity::ActiveModel::from(user))
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<User, DomainError> {
        UserEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Into::into)
            .ok_or_else(|| DomainError::not_found(id))
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let res = UserEntity::update_many()
            .col_expr(Column::Email, Expr::value(user.email.clone()))
            .col_expr(Column::Password, Expr::value(user.password.clone()))
            .filter(Column::Id.eq(user.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if res.rows_affected == 0 {
            return Err(DomainError::not_found(&user.id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let res = UserEntity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
