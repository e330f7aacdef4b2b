use thiserror::Error;

/// Classification of a control-plane service error, derived from the
/// service's error code. Lets callers tell "already in the desired state"
/// apart from throttling or permission problems instead of swallowing
/// every failure alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// The resource or registration already exists.
    AlreadyExists,
    /// The resource or registration was already gone.
    NotFound,
    Throttled,
    AccessDenied,
    Other,
}

#[derive(Error, Debug)]
pub enum EnablerError {
    #[error("{service} call failed ({kind:?}): {message}")]
    Service {
        service: &'static str,
        kind: ServiceErrorKind,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Custom resource response delivery failed: {0}")]
    ResponseDelivery(#[from] reqwest::Error),

    #[error("Invalid response URL: {0}")]
    ResponseUrl(#[from] url::ParseError),
}

impl EnablerError {
    pub fn service_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            Self::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// True when the failed call reported the resource already in the state
    /// we were driving it to (duplicate create, delete of a missing thing).
    pub fn is_already_converged(&self) -> bool {
        matches!(
            self.service_kind(),
            Some(ServiceErrorKind::AlreadyExists | ServiceErrorKind::NotFound)
        )
    }
}

pub type Result<T> = std::result::Result<T, EnablerError>;
