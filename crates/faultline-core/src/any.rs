//! AnyError: capability shared by every error kind
use crate::code::ErrorCode;
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Prior error recorded as the cause of a new one
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Which concrete kind an error value is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unrecoverable or internal failure
    Fatal,
    /// Caller supplied bad input
    InvalidArgument,
    /// Value outside acceptable bounds
    Range,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 3] = [ErrorKind::Fatal, ErrorKind::InvalidArgument, ErrorKind::Range];

    /// Code used when the caller does not supply one
    pub const fn default_code(self) -> ErrorCode {
        match self {
            ErrorKind::Fatal => ErrorCode::INTERNAL_ERROR,
            ErrorKind::InvalidArgument => ErrorCode::INVALID,
            ErrorKind::Range => ErrorCode::RANGE_NOT_SATISFIABLE,
        }
    }

    /// Broad family the kind belongs to
    pub const fn class(self) -> ErrorClass {
        match self {
            ErrorKind::InvalidArgument => ErrorClass::Logic,
            ErrorKind::Fatal | ErrorKind::Range => ErrorClass::Runtime,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Fatal => "fatal",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Range => "range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logic errors point at a bug in the calling code; runtime errors can only
/// be detected while the program runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    Logic,
    Runtime,
}

/// How loudly an error should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// Source location an error was raised from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl From<&'static Location<'static>> for Origin {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Marker capability of every faultline error.
///
/// Anything implementing it is also a regular `std::error::Error`, so it
/// works with `?`, `Box<dyn Error>` and friends. `source()` yields the cause.
pub trait AnyError: StdError + Send + Sync + 'static {
    /// Message given at construction, empty when none was given
    fn message(&self) -> &str;

    fn code(&self) -> ErrorCode;

    /// The prior error this one was built with, if any
    fn previous(&self) -> Option<&Cause>;

    /// Call stack captured at construction
    fn trace(&self) -> &Trace;

    fn kind(&self) -> ErrorKind;

    /// Call site of the constructor, for kinds that record one
    fn origin(&self) -> Option<Origin> {
        None
    }

    /// Fatal errors are always `Error`; other kinds are `Error` only with a
    /// 5xx code
    fn severity(&self) -> Severity {
        if self.kind() == ErrorKind::Fatal || self.code().is_server_error() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    fn trace_as_string(&self) -> String {
        self.trace().to_string()
    }

    /// Iterate over the cause chain, nearest cause first
    fn chain(&self) -> Chain<'_> {
        Chain { next: self.source() }
    }

    /// Last error in the cause chain, if there is a chain at all
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.chain().last()
    }
}

/// Iterator over an error's causes, see [`AnyError::chain`]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// View a plain error as a faultline error, when it is one
pub fn as_any_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn AnyError> {
    if let Some(e) = err.downcast_ref::<crate::FatalError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<crate::InvalidArgumentError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<crate::RangeError>() {
        return Some(e);
    }
    err.downcast_ref::<crate::Error>().map(|e| e as &dyn AnyError)
}

/// State shared by all kinds: message, code, cause and trace
#[derive(Debug, Clone)]
pub(crate) struct ErrorParts {
    pub(crate) message: String,
    pub(crate) code: ErrorCode,
    pub(crate) cause: Option<Cause>,
    pub(crate) trace: Trace,
}

impl ErrorParts {
    pub(crate) fn new(
        message: Option<String>,
        code: ErrorCode,
        cause: Option<Cause>,
        trace: Trace,
    ) -> Self {
        Self {
            message: message.unwrap_or_default(),
            code,
            cause,
            trace,
        }
    }

    pub(crate) fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl fmt::Display for ErrorParts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "[{}]", self.code)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}
