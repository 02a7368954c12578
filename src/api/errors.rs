use thiserror::Error;

/// Failures of a vault search action.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VaultError {
    /// The query is incomplete and was not sent.
    #[error("search form is incomplete")]
    ValidationBlocked,

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("server responded with status {status}")]
    ServerFailure { status: u16 },

    /// A successful response carried a body that could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Coarse classification of non-success statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerFailureKind {
    NotFound,
    Internal,
    Unavailable,
    Unexpected,
}

impl ServerFailureKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            500 => Self::Internal,
            503 => Self::Unavailable,
            _ => Self::Unexpected,
        }
    }
}

pub type VaultResult<T> = Result<T, VaultError>;

impl VaultError {
    pub fn server_kind(&self) -> Option<ServerFailureKind> {
        match self {
            Self::ServerFailure { status } => Some(ServerFailureKind::from_status(*status)),
            _ => None,
        }
    }

    /// Whether the error should be displayed to the user at all.
    pub fn is_displayed(&self) -> bool {
        !matches!(self, Self::ValidationBlocked)
    }

    /// Text shown in place of the results.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ValidationBlocked => "Enter a title or an author and pick at least one renderer.",
            Self::TransportFailure(_) => "Could not reach the vault. Check your connection.",
            Self::InvalidResponse(_) => "The vault returned a response that could not be read.",
            Self::ServerFailure { status } => match ServerFailureKind::from_status(*status) {
                ServerFailureKind::NotFound => "No brews matched the search.",
                ServerFailureKind::Internal => "The vault hit an internal error.",
                ServerFailureKind::Unavailable => "The vault is temporarily unavailable.",
                ServerFailureKind::Unexpected => "The vault returned an unexpected error.",
            },
        }
    }
}

impl From<reqwest::Error> for VaultError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            VaultError::ServerFailure {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            VaultError::InvalidResponse(err.to_string())
        } else {
            VaultError::TransportFailure(err.to_string())
        }
    }
}
