use common::InvalidIsoCode;
use thiserror::Error;

/// Errors returned by status store operations.
///
/// The display strings are the messages sent to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The ISO code or the status was missing or empty.
    #[error("ISO code and status are required")]
    MissingField,

    /// The user already has a status for this country.
    #[error("Country already has a status")]
    Conflict { iso_code: String },

    /// The ISO code is not two uppercase ASCII letters.
    #[error("Invalid ISO code")]
    InvalidFormat { iso_code: String },

    /// No status is stored for this user and country.
    #[error("Country status not found")]
    NotFound { iso_code: String },
}

impl StatusError {
    /// Short machine-readable name, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            StatusError::MissingField => "missing_field",
            StatusError::Conflict { .. } => "conflict",
            StatusError::InvalidFormat { .. } => "invalid_format",
            StatusError::NotFound { .. } => "not_found",
        }
    }
}

impl From<InvalidIsoCode> for StatusError {
    fn from(err: InvalidIsoCode) -> Self {
        StatusError::InvalidFormat { iso_code: err.0 }
    }
}

/// Result type for status store operations.
pub type Result<T> = std::result::Result<T, StatusError>;
