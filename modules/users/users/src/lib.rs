#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Users Module
//!
//! User account management over gRPC, backed by a relational store.
//!
//! ## Architecture
//!
//! - `domain/validation.rs` - email/password rules
//! - `domain/service.rs` - business logic and id assignment
//! - `domain/repo.rs` - persistence port (`UsersRepository`)
//! - `infra/storage/` - SeaORM implementation of the port
//! - `api/grpc/` - tonic handler and server hosting
//! - `module.rs` - wiring and lifecycle
//!
//! External consumers should use the `users-sdk` crate, which provides
//! the models, the proto contract and a gRPC client.

// === PUBLIC API (from SDK) ===
pub use users_sdk::{User, UserRequest, UsersClient, UsersError};

// === MODULE DEFINITION ===
pub mod module;
pub use module::UsersModule;

pub mod config;
pub use config::{DatabaseConfig, GrpcServerConfig, UsersConfig};

// === INTERNAL MODULES ===
// Exposed for integration testing; prefer the SDK types for stable APIs.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
