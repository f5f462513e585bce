use thiserror::Error;

/// Opaque identifier for a user's status collection.
///
/// No format is enforced; any path segment is a valid user ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Returned when a string is not exactly two uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ISO code: {0:?}")]
pub struct InvalidIsoCode(pub String);

/// Two-letter country code matching `^[A-Z]{2}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsoCode(String);

impl IsoCode {
    /// Validates `code` and wraps it.
    pub fn parse(code: &str) -> Result<Self, InvalidIsoCode> {
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code.to_string()))
        } else {
            Err(InvalidIsoCode(code.to_string()))
        }
    }

    /// Consumes the code, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for IsoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
