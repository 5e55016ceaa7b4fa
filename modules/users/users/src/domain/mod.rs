//! Domain layer - business rules and the persistence port.
//!
//! The domain layer:
//! - **MAY** import: `users_sdk` (contract models)
//! - **MUST NOT** import: `api::*` or `infra::*`

pub mod error;
pub mod repo;
pub mod service;
pub mod validation;
