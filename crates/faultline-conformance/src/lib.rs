//! Conformance harness for faultline error kinds
//!
//! Every kind must behave the same way: it is an [`AnyError`], belongs to its
//! expected class, and hands back exactly the message, code and cause it was
//! built with. [`KindSpec`] describes one kind; [`argument_matrix`] yields the
//! constructor arguments it is checked against.
//!
//! ```
//! use faultline_conformance::KindSpec;
//! use faultline_core::{ErrorClass, ErrorKind, RangeError};
//!
//! let spec = KindSpec {
//!     name: "RangeError",
//!     build: RangeError::from_parts,
//!     kind: ErrorKind::Range,
//!     class: ErrorClass::Runtime,
//! };
//! assert!(spec.check_all().is_empty());
//! ```

use faultline_core::{AnyError, Cause, ErrorClass, ErrorCode, ErrorKind};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Messages every kind is built with, `None` meaning "not given"
pub const MESSAGES: [Option<&str>; 3] = [None, Some(""), Some("foo")];

/// Codes every kind is built with. 123 is deliberately unregistered.
pub const CODES: [Option<ErrorCode>; 3] = [None, Some(ErrorCode::UNKNOWN), Some(ErrorCode::new(123))];

/// One set of constructor arguments
#[derive(Clone)]
pub struct Case {
    pub message: Option<String>,
    pub code: Option<ErrorCode>,
    pub cause: Option<Cause>,
}

impl Case {
    pub fn expected_message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn expected_code(&self, kind: ErrorKind) -> ErrorCode {
        self.code.unwrap_or_else(|| kind.default_code())
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}, {})",
            self.message,
            self.code.map(ErrorCode::value),
            if self.cause.is_some() { "cause" } else { "None" }
        )
    }
}

/// Stand-in for an error raised by code outside faultline
pub fn foreign_cause() -> Cause {
    Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "prior failure"))
}

/// Every combination of [`MESSAGES`], [`CODES`] and an absent or present cause
pub fn argument_matrix() -> Vec<Case> {
    let mut cases = Vec::new();
    for message in MESSAGES {
        for code in CODES {
            for with_cause in [false, true] {
                cases.push(Case {
                    message: message.map(str::to_string),
                    code,
                    cause: with_cause.then(foreign_cause),
                });
            }
        }
    }
    cases
}

/// A constructor result that broke the contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} {case}: {field} expected {expected}, got {actual}")]
pub struct Mismatch {
    pub kind: &'static str,
    pub case: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// Description of one error kind under test
pub struct KindSpec<E> {
    /// Type name used in mismatch reports
    pub name: &'static str,
    /// The kind's `(message, code, cause)` constructor
    pub build: fn(Option<String>, Option<ErrorCode>, Option<Cause>) -> E,
    pub kind: ErrorKind,
    /// Class the kind must belong to
    pub class: ErrorClass,
}

impl<E: AnyError> KindSpec<E> {
    /// Build with `case` and check the result
    pub fn check_case(&self, case: &Case) -> Result<E, Mismatch> {
        let err = (self.build)(case.message.clone(), case.code, case.cause.clone());
        self.check_value(&err, case)?;
        Ok(err)
    }

    /// Check an already built value against the arguments it came from
    pub fn check_value(&self, err: &E, case: &Case) -> Result<(), Mismatch> {
        let mismatch = |field, expected: String, actual: String| Mismatch {
            kind: self.name,
            case: format!("{:?}", case),
            field,
            expected,
            actual,
        };

        if err.kind() != self.kind {
            return Err(mismatch("kind", self.kind.to_string(), err.kind().to_string()));
        }
        if err.kind().class() != self.class {
            return Err(mismatch(
                "class",
                format!("{:?}", self.class),
                format!("{:?}", err.kind().class()),
            ));
        }
        if err.message() != case.expected_message() {
            return Err(mismatch(
                "message",
                case.expected_message().to_string(),
                err.message().to_string(),
            ));
        }

        let expected_code = case.expected_code(self.kind);
        if err.code() != expected_code {
            return Err(mismatch("code", expected_code.to_string(), err.code().to_string()));
        }

        match (&case.cause, err.previous()) {
            (None, None) => {}
            (Some(expected), Some(actual)) if Arc::ptr_eq(expected, actual) => {}
            (expected, actual) => {
                return Err(mismatch(
                    "cause",
                    format!("{:?}", expected.as_ref().map(|c| c.to_string())),
                    format!("{:?}", actual.map(|c| c.to_string())),
                ));
            }
        }

        if !same_error(err.source(), err.previous()) {
            return Err(mismatch(
                "source",
                "the cause".to_string(),
                format!("{:?}", err.source().map(|s| s.to_string())),
            ));
        }

        if err.trace_as_string() != err.trace().to_string() {
            return Err(mismatch(
                "trace",
                err.trace().to_string(),
                err.trace_as_string(),
            ));
        }

        Ok(())
    }

    /// Run the whole matrix, collecting every mismatch
    pub fn check_all(&self) -> Vec<Mismatch> {
        argument_matrix()
            .iter()
            .filter_map(|case| self.check_case(case).err())
            .collect()
    }
}

impl<E: AnyError + Default> KindSpec<E> {
    /// Zero-argument construction yields the kind with its default code
    pub fn check_default(&self) -> Result<E, Mismatch> {
        let err = E::default();
        let case = Case {
            message: None,
            code: None,
            cause: None,
        };
        self.check_value(&err, &case)?;
        Ok(err)
    }
}

fn same_error(source: Option<&(dyn StdError + 'static)>, cause: Option<&Cause>) -> bool {
    match (source, cause) {
        (None, None) => true,
        (Some(source), Some(cause)) => std::ptr::eq(
            source as *const dyn StdError as *const u8,
            Arc::as_ptr(cause) as *const u8,
        ),
        _ => false,
    }
}
