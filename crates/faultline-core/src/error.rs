//! Unified Error Model
use crate::any::{AnyError, Cause, ErrorKind, Origin, Severity};
use crate::code::ErrorCode;
use crate::fatal::FatalError;
use crate::invalid_argument::InvalidArgumentError;
use crate::range::RangeError;
use crate::trace::Trace;
use thiserror::Error;

/// Any of the faultline error kinds, for APIs that can fail in more than one way
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error(transparent)]
    Fatal(#[from] FatalError),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn inner(&self) -> &dyn AnyError {
        match self {
            Error::Fatal(e) => e,
            Error::InvalidArgument(e) => e,
            Error::Range(e) => e,
        }
    }
}

impl AnyError for Error {
    fn message(&self) -> &str {
        self.inner().message()
    }

    fn code(&self) -> ErrorCode {
        self.inner().code()
    }

    fn previous(&self) -> Option<&Cause> {
        self.inner().previous()
    }

    fn trace(&self) -> &Trace {
        self.inner().trace()
    }

    fn kind(&self) -> ErrorKind {
        self.inner().kind()
    }

    fn origin(&self) -> Option<Origin> {
        self.inner().origin()
    }

    fn severity(&self) -> Severity {
        self.inner().severity()
    }
}
