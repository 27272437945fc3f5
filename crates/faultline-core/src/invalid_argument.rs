//! InvalidArgumentError: the caller passed something unusable
use crate::any::{AnyError, Cause, ErrorKind, ErrorParts};
use crate::code::ErrorCode;
use crate::trace::Trace;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InvalidArgumentError {
    parts: ErrorParts,
}

impl InvalidArgumentError {
    pub const DEFAULT_CODE: ErrorCode = ErrorCode::INVALID;

    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(Some(message.into()), None, None)
    }

    /// Build from the optional `(message, code, cause)` triple
    pub fn from_parts(
        message: Option<String>,
        code: Option<ErrorCode>,
        cause: Option<Cause>,
    ) -> Self {
        let code = code.unwrap_or(Self::DEFAULT_CODE);
        Self {
            parts: ErrorParts::new(message, code, cause, Trace::capture()),
        }
    }

    pub fn with_code(mut self, code: impl Into<ErrorCode>) -> Self {
        self.parts.code = code.into();
        self
    }

    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.parts.cause = Some(cause);
        self
    }
}

impl Default for InvalidArgumentError {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.parts, f)
    }
}

impl StdError for InvalidArgumentError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.parts.source()
    }
}

impl AnyError for InvalidArgumentError {
    fn message(&self) -> &str {
        &self.parts.message
    }

    fn code(&self) -> ErrorCode {
        self.parts.code
    }

    fn previous(&self) -> Option<&Cause> {
        self.parts.cause.as_ref()
    }

    fn trace(&self) -> &Trace {
        &self.parts.trace
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let err = InvalidArgumentError::default();
        assert_eq!(err.code(), ErrorCode::INVALID);
        assert_eq!(err.message(), "");
        assert!(err.previous().is_none());
        assert!(err.origin().is_none());
    }

    #[test]
    fn test_bad_type_with_prior_error() {
        let prior: Cause = Arc::new(InvalidArgumentError::new("expected string"));
        let err = InvalidArgumentError::from_parts(
            Some("bad type".to_string()),
            Some(ErrorCode::INVALID),
            Some(prior.clone()),
        );

        assert_eq!(err.code().value(), 400);
        assert_eq!(err.message(), "bad type");
        assert!(Arc::ptr_eq(err.previous().unwrap(), &prior));
        assert_eq!(err.chain().count(), 1);
    }

    #[test]
    fn test_no_code_validation() {
        let err = InvalidArgumentError::new("odd").with_code(ErrorCode::new(-1));
        assert_eq!(err.code().value(), -1);
        assert_eq!(err.to_string(), "[-1] odd");
    }
}
