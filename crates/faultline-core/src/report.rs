//! Error reports: serializable snapshots and structured log events
use crate::any::{as_any_error, AnyError, ErrorClass, ErrorKind, Severity};
use crate::code::ErrorCode;
use crate::trace::Frame;
use serde::{Deserialize, Serialize};

/// One link of a cause chain as it appears in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseReport {
    pub message: String,
    /// Present when the cause is itself a faultline error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

/// Owned, serializable view of an error and everything that led to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub class: ErrorClass,
    pub severity: Severity,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_name: Option<String>,
    pub message: String,
    /// `file:line:column` of the raising call, fatal errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<CauseReport>,
}

impl ErrorReport {
    pub fn from_error(err: &dyn AnyError) -> Self {
        let causes = err
            .chain()
            .map(|cause| match as_any_error(cause) {
                Some(known) => CauseReport {
                    message: known.message().to_string(),
                    code: Some(known.code()),
                },
                None => CauseReport {
                    message: cause.to_string(),
                    code: None,
                },
            })
            .collect();

        Self {
            kind: err.kind(),
            class: err.kind().class(),
            severity: err.severity(),
            code: err.code(),
            code_name: err.code().name().map(str::to_string),
            message: err.message().to_string(),
            origin: err.origin().map(|o| o.to_string()),
            frames: err.trace().frames().to_vec(),
            causes,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Emit one `tracing` event describing `err`.
///
/// The level follows [`AnyError::severity`]: `error` for fatal errors and 5xx
/// codes, `warn` for everything else.
pub fn log_error(err: &dyn AnyError) {
    let code = err.code().value();
    let kind = err.kind();
    let causes: Vec<String> = err.chain().map(|c| c.to_string()).collect();
    let origin = err.origin().map(|o| o.to_string()).unwrap_or_default();

    match err.severity() {
        Severity::Error => tracing::error!(
            code,
            kind = %kind,
            origin = %origin,
            causes = ?causes,
            "{}",
            err.message()
        ),
        Severity::Warning => tracing::warn!(
            code,
            kind = %kind,
            origin = %origin,
            causes = ?causes,
            "{}",
            err.message()
        ),
    }
}
