//! gRPC transport for the users service.

pub mod error;
pub mod serve;
pub mod server;

pub use serve::{bind, serve_with_listener};
pub use server::UsersServiceImpl;
