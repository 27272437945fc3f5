//! RangeError: a value fell outside the bounds it must respect
use crate::any::{AnyError, Cause, ErrorKind, ErrorParts};
use crate::code::ErrorCode;
use crate::trace::Trace;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RangeError {
    parts: ErrorParts,
}

impl RangeError {
    pub const DEFAULT_CODE: ErrorCode = ErrorCode::RANGE_NOT_SATISFIABLE;

    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(Some(message.into()), None, None)
    }

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

impl Default for RangeError {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.parts, f)
    }
}

impl StdError for RangeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.parts.source()
    }
}

impl AnyError for RangeError {
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
        ErrorKind::Range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds() {
        let err = RangeError::new("index 10 out of bounds");
        assert_eq!(err.code(), ErrorCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(err.code().value(), 416);
        assert_eq!(err.message(), "index 10 out of bounds");
        assert!(err.previous().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_cause_from_foreign_error() {
        let parse = "ten".parse::<u32>().unwrap_err();
        let err = RangeError::new("limit unreadable").with_cause(parse);

        let cause = err.previous().unwrap();
        assert!(cause.downcast_ref::<std::num::ParseIntError>().is_some());
        assert!(err.root_cause().is_some());
    }
}
