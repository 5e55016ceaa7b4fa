//! Infrastructure storage layer - SeaORM persistence.
//!
//! This module contains ALL SeaORM-specific code and database operations:
//! - `entity` - SeaORM entity for the `users` table
//! - `mapper` - Conversions between the entity model and SDK `User`
//! - `migrations` - Database schema migrations
//! - `db` - Connection bootstrap and error conversion
//! - `sea_orm_repo` - `UsersRepository` implementation

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use sea_orm_repo::SeaOrmUsersRepository;
