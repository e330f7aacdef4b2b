//! AWS SDK adapters behind the core port traits. Every error leaves this
//! layer as an [`EnablerError::Service`] carrying the classified kind.

pub mod analyzer;
pub mod organizations;
pub mod regions;
pub mod trail;

pub use analyzer::AssumedRoleAnalyzerService;
pub use organizations::OrganizationsDirectory;
pub use regions::StackSetRegionDirectory;
pub use trail::ControlTowerTrail;

use crate::utils::error::{EnablerError, ServiceErrorKind};
use aws_sdk_organizations::error::{ProvideErrorMetadata, SdkError};

/// Fold an SDK operation error into the crate error type, classifying the
/// service error code so callers can tell convergence from real failures.
pub(crate) fn service_error<E, R>(service: &'static str, err: SdkError<E, R>) -> EnablerError
where
    E: ProvideErrorMetadata + std::fmt::Debug,
    R: std::fmt::Debug,
{
    let kind = classify(err.code());
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{err:?}"));
    EnablerError::Service {
        service,
        kind,
        message,
    }
}

fn classify(code: Option<&str>) -> ServiceErrorKind {
    match code {
        Some("ConflictException")
        | Some("ResourceAlreadyExistsException")
        | Some("AccountAlreadyRegisteredException") => ServiceErrorKind::AlreadyExists,
        Some("ResourceNotFoundException") | Some("AccountNotRegisteredException") => {
            ServiceErrorKind::NotFound
        }
        Some("ThrottlingException") | Some("TooManyRequestsException") => {
            ServiceErrorKind::Throttled
        }
        Some("AccessDeniedException") | Some("AccessDeniedForDependencyException") => {
            ServiceErrorKind::AccessDenied
        }
        _ => ServiceErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_service_error_codes() {
        assert_eq!(
            classify(Some("ConflictException")),
            ServiceErrorKind::AlreadyExists
        );
        assert_eq!(
            classify(Some("AccountAlreadyRegisteredException")),
            ServiceErrorKind::AlreadyExists
        );
        assert_eq!(
            classify(Some("ResourceNotFoundException")),
            ServiceErrorKind::NotFound
        );
        assert_eq!(
            classify(Some("AccountNotRegisteredException")),
            ServiceErrorKind::NotFound
        );
        assert_eq!(
            classify(Some("ThrottlingException")),
            ServiceErrorKind::Throttled
        );
        assert_eq!(
            classify(Some("AccessDeniedException")),
            ServiceErrorKind::AccessDenied
        );
        assert_eq!(classify(Some("InternalFailure")), ServiceErrorKind::Other);
        assert_eq!(classify(None), ServiceErrorKind::Other);
    }
}
