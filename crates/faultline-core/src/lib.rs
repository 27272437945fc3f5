//! faultline: error codes and error kinds
//!
//! A fixed registry of HTTP-inspired [`ErrorCode`]s and three error kinds
//! that carry them: [`FatalError`], [`InvalidArgumentError`] and
//! [`RangeError`]. Each kind records a message, a code (with a kind-specific
//! default), an optional cause and a stack trace. Fatal errors additionally
//! remember the file and line they were raised from.
//!
//! # Example
//!
//! ```
//! use faultline_core::{range, AnyError, ErrorCode, InvalidArgumentError};
//!
//! let err = range("index 10 out of bounds");
//! assert_eq!(err.code(), ErrorCode::RANGE_NOT_SATISFIABLE);
//!
//! let wrapped = InvalidArgumentError::new("bad type").with_cause(err);
//! assert_eq!(wrapped.code().value(), 400);
//! assert_eq!(wrapped.chain().count(), 1);
//! ```

pub mod any;
pub mod code;
pub mod config;
pub mod error;
pub mod fatal;
pub mod invalid_argument;
pub mod range;
pub mod report;
pub mod trace;

#[cfg(test)]
mod test_support;

pub use any::{as_any_error, AnyError, Cause, Chain, ErrorClass, ErrorKind, Origin, Severity};
pub use code::ErrorCode;
pub use config::{trace_policy, TracePolicy};
pub use error::{Error, Result};
pub use fatal::FatalError;
pub use invalid_argument::InvalidArgumentError;
pub use range::RangeError;
pub use report::{log_error, CauseReport, ErrorReport};
pub use trace::{Frame, Trace};

/// Raise a [`FatalError`] attributed to the calling line
#[track_caller]
pub fn fatal(message: impl Into<String>) -> FatalError {
    FatalError::new(message)
}

pub fn invalid_argument(message: impl Into<String>) -> InvalidArgumentError {
    InvalidArgumentError::new(message)
}

pub fn range(message: impl Into<String>) -> RangeError {
    RangeError::new(message)
}
