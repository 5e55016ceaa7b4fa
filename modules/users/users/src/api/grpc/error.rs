use tonic::Status;

use crate::domain::error::DomainError;

/// Map a domain error to a gRPC status.
///
/// Applied uniformly to every RPC: `Validation` -> `InvalidArgument`,
/// `NotFound` -> `NotFound`, `Storage` -> `Internal`.
#[must_use]
pub fn domain_error_to_status(e: DomainError) -> Status {
    match e {
        DomainError::Validation { message } => Status::invalid_argument(message),
        e @ DomainError::NotFound { .. } => Status::not_found(e.to_string()),
        e @ DomainError::Storage { .. } => {
            tracing::error!(error = %e, "Storage error occurred");
            Status::internal(e.to_string())
        }
    }
}

impl From<DomainError> for Status {
    fn from(e: DomainError) -> Self {
        domain_error_to_status(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;
    use tracing_test::traced_test;

    #[test]
    fn validation_maps_to_invalid_argument() {
        let status = Status::from(DomainError::validation("invalid email format"));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "invalid email format");
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let status = Status::from(DomainError::not_found("abc"));
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "user not found: abc");
    }

    #[traced_test]
    #[test]
    fn storage_maps_to_internal_and_is_logged() {
        let status = Status::from(DomainError::storage("disk I/O error"));
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("disk I/O error"));
        assert!(logs_contain("Storage error occurred"));
    }
}
