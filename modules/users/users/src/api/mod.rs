//! Transport-facing layer.
//!
//! Pure translation between wire messages and domain calls. No business
//! rules live here.

pub mod grpc;
