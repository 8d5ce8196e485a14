//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── InvalidMatchId   - path segment is not an integer      (400)
//! ├── MalformedBody    - request body failed to decode       (400)
//! └── MatchNotFound    - no match stored under the given id  (404)
//! ```
//!
//! # Examples
//!
//! ```
//! use match_tracker::application::error::ApplicationError;
//! use match_tracker::domain::value_objects::MatchId;
//!
//! let err = ApplicationError::not_found(MatchId::new(3));
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "Match not found");
//! ```

use crate::domain::value_objects::MatchId;
use thiserror::Error;

/// Application layer error.
///
/// The `Display` text is what clients see in the response body.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The id in the path is not an integer.
    #[error("Invalid match ID")]
    InvalidMatchId(String),

    /// The request body could not be decoded as a match.
    #[error("{0}")]
    MalformedBody(String),

    /// No match is stored under the id.
    #[error("Match not found")]
    MatchNotFound(MatchId),
}

impl ApplicationError {
    /// Creates an invalid id error for the raw path segment.
    #[must_use]
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidMatchId(raw.into())
    }

    /// Creates a malformed body error carrying the decoder message.
    #[must_use]
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(id: MatchId) -> Self {
        Self::MatchNotFound(id)
    }

    /// Returns true if the request itself was invalid.
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::InvalidMatchId(_) | Self::MalformedBody(_))
    }

    /// Returns true if the referenced match does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MatchNotFound(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message() {
        let err = ApplicationError::invalid_id("abc");
        assert_eq!(err.to_string(), "Invalid match ID");
        assert!(err.is_bad_request());
        assert!(!err.is_not_found());
    }

    #[test]
    fn malformed_body_keeps_decoder_text() {
        let err = ApplicationError::malformed_body("expected value at line 1 column 1");
        assert_eq!(err.to_string(), "expected value at line 1 column 1");
        assert!(err.is_bad_request());
    }

    #[test]
    fn not_found_variant() {
        let err = ApplicationError::not_found(MatchId::new(5));
        assert!(err.is_not_found());
        assert!(!err.is_bad_request());
        assert!(matches!(err, ApplicationError::MatchNotFound(id) if id == MatchId::new(5)));
    }
}
