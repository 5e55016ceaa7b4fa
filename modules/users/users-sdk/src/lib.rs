//! Users SDK
//!
//! This crate provides everything needed to consume or host the users service:
//! - Models (`User`, `UserRequest`)
//! - API trait (`UsersClient`) and error type (`UsersError`)
//! - gRPC client (`UsersGrpcClient`)
//! - Proto stubs for the server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use users_sdk::{UserRequest, UsersClient, UsersGrpcClient};
//!
//! let client = UsersGrpcClient::connect("http://127.0.0.1:50051").await?;
//! let user = client
//!     .create_user(UserRequest::new("a@b", "abc12345"))
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODELS ===
pub mod models;
pub use models::{User, UserRequest};

// === API TRAIT AND TYPES ===
mod api;
pub use api::{UsersClient, UsersError};

// === GRPC CLIENT ===
mod client;
pub use client::{GrpcClientConfig, UsersGrpcClient};

mod convert;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `UserService`
#[allow(clippy::pedantic, clippy::default_trait_access)]
pub mod proto {
    tonic::include_proto!("users.v1");
}

// Re-export proto types needed by server
pub use proto::user_service_server::{UserService, UserServiceServer};

/// Fully-qualified gRPC service name
pub const SERVICE_NAME: &str = "users.v1.UserService";
