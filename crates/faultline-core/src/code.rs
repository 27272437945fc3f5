//! Error Codes: HTTP-inspired numeric classifiers
//!
//! The registry is part of the public contract. Removing or renumbering a
//! code is a breaking change; adding one is not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric classifier attached to every error value.
///
/// Any integer is a valid code. The named constants below form the registry,
/// but codes outside of it are stored and reported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i64);

macro_rules! registry {
    ($( $(#[$doc:meta])* $name:ident = $value:literal, $desc:literal; )*) => {
        impl ErrorCode {
            $(
                $(#[$doc])*
                pub const $name: ErrorCode = ErrorCode($value);
            )*

            /// Every registered code, in ascending order
            pub const REGISTRY: &'static [ErrorCode] = &[$(ErrorCode::$name),*];

            /// Registry name of this code, if it has one
            pub const fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($name)),)*
                    _ => None,
                }
            }

            /// Short human-readable description of a registered code
            pub const fn description(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($desc),)*
                    _ => None,
                }
            }
        }
    };
}

registry! {
    /// Unknown issues
    UNKNOWN = 0, "unknown issue";
    /// Multiple choices
    MULTIPLE_CHOICES = 300, "multiple choices";
    /// Invalid input or arguments
    INVALID = 400, "invalid input or arguments";
    /// Missing access credentials
    UNAUTHORIZED = 401, "missing access credentials";
    /// Access to a restricted resource
    FORBIDDEN = 403, "access to a restricted resource";
    NOT_FOUND = 404, "entity not found";
    NOT_ALLOWED = 405, "operation not allowed";
    /// The caller's requirements cannot be met
    NOT_ACCEPTABLE = 406, "requirements cannot be met";
    TIMEOUT = 408, "timeout";
    CONFLICT = 409, "conflict";
    /// Entity is not available any more
    GONE = 410, "entity gone";
    LENGTH_REQUIRED = 411, "length specification required";
    /// Unmet condition
    PRECONDITION_FAILED = 412, "precondition failed";
    ENTITY_TOO_LARGE = 413, "entity too large";
    UNSUPPORTED_TYPE = 415, "type not supported";
    /// Invalid range or slice
    RANGE_NOT_SATISFIABLE = 416, "range not satisfiable";
    /// Failed expectation or assertion
    EXPECTATION_FAILED = 417, "expectation failed";
    /// Internal error in general
    INTERNAL_ERROR = 500, "internal error";
    NOT_IMPLEMENTED = 501, "not implemented";
    /// Issue with an available external resource
    BAD_GATEWAY = 502, "bad gateway";
    /// External resource unavailable
    UNAVAILABLE = 503, "external resource unavailable";
    /// External resource timed out
    GATEWAY_TIMEOUT = 504, "external resource timeout";
    /// Version conflict
    VERSION_NOT_SUPPORTED = 505, "version not supported";
}

impl ErrorCode {
    /// Wrap an arbitrary integer. No validation is performed.
    pub const fn new(value: i64) -> Self {
        ErrorCode(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn is_registered(self) -> bool {
        self.name().is_some()
    }

    /// 4xx codes: the caller did something wrong
    pub const fn is_client_error(self) -> bool {
        self.0 >= 400 && self.0 <= 499
    }

    /// 5xx codes: something failed on our side or further upstream
    pub const fn is_server_error(self) -> bool {
        self.0 >= 500 && self.0 <= 599
    }

    /// Look a code up by registry name.
    ///
    /// Accepts `NOT_FOUND` as well as the prefixed `E_NOT_FOUND` spelling,
    /// case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("E_").unwrap_or(&upper);
        Self::REGISTRY
            .iter()
            .copied()
            .find(|code| code.name() == Some(bare))
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::UNKNOWN
    }
}

impl From<i64> for ErrorCode {
    fn from(value: i64) -> Self {
        ErrorCode(value)
    }
}

impl From<ErrorCode> for i64 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
