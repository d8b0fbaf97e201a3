use thiserror::Error;

/// The recoverable failures of the message crate.
///
/// Mutating a message never fails; these come from reading values back out
/// through a [`Wrapper`](crate::wrapper::Wrapper) or from converting headers
/// into `http` types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("header not found: {name}")]
    HeaderNotFound { name: String },

    #[error("invalid body: {reason}")]
    InvalidBody { reason: String },

    #[error("invalid header name: {name}")]
    InvalidHeaderName { name: String },

    #[error("invalid header value for {name}")]
    InvalidHeaderValue { name: String },
}

impl MessageError {
    pub fn header_not_found<S: ToString>(name: S) -> Self {
        Self::HeaderNotFound { name: name.to_string() }
    }

    pub fn invalid_body<S: ToString>(reason: S) -> Self {
        Self::InvalidBody { reason: reason.to_string() }
    }

    pub fn invalid_header_name<S: ToString>(name: S) -> Self {
        Self::InvalidHeaderName { name: name.to_string() }
    }

    pub fn invalid_header_value<S: ToString>(name: S) -> Self {
        Self::InvalidHeaderValue { name: name.to_string() }
    }

    /// Returns true if this error reports a missing header
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, MessageError::HeaderNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_header() {
        let error = MessageError::header_not_found("X-Request-Id");
        assert_eq!(error.to_string(), "header not found: X-Request-Id");
        assert!(error.is_not_found());
    }

    #[test]
    fn invalid_body_is_not_a_missing_header() {
        let error = MessageError::invalid_body("invalid digit found in string");
        assert_eq!(error.to_string(), "invalid body: invalid digit found in string");
        assert!(!error.is_not_found());
    }
}
