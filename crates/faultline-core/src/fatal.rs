//! FatalError: unrecoverable or internal failures
//!
//! Unlike the other kinds, a fatal error remembers where it was raised. The
//! constructors are `#[track_caller]`, so the origin is the line that called
//! them, and their own frames are dropped from the captured trace.
use crate::any::{AnyError, Cause, ErrorKind, ErrorParts, Origin};
use crate::code::ErrorCode;
use crate::trace::{Frame, Trace};
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Symbol fragment shared by this module and the `fatal()` factory
const CONSTRUCTOR_FRAMES: &str = "faultline_core::fatal";

#[derive(Debug, Clone)]
pub struct FatalError {
    parts: ErrorParts,
    origin: Origin,
}

impl FatalError {
    pub const DEFAULT_CODE: ErrorCode = ErrorCode::INTERNAL_ERROR;

    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::raise(Some(message.into()), None, None, Location::caller())
    }

    /// Build from the optional `(message, code, cause)` triple.
    ///
    /// A missing code means [`FatalError::DEFAULT_CODE`].
    #[track_caller]
    pub fn from_parts(
        message: Option<String>,
        code: Option<ErrorCode>,
        cause: Option<Cause>,
    ) -> Self {
        Self::raise(message, code, cause, Location::caller())
    }

    #[inline(never)]
    fn raise(
        message: Option<String>,
        code: Option<ErrorCode>,
        cause: Option<Cause>,
        location: &'static Location<'static>,
    ) -> Self {
        let code = code.unwrap_or(Self::DEFAULT_CODE);
        let mut trace = Trace::capture();
        trace.drop_leading(is_constructor_frame);

        tracing::debug!(
            file = location.file(),
            line = location.line(),
            "fatal error raised"
        );

        Self {
            parts: ErrorParts::new(message, code, cause, trace),
            origin: Origin::from(location),
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

    /// Record a cause that is also held elsewhere
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.parts.cause = Some(cause);
        self
    }

    /// Where the error was raised
    pub fn file(&self) -> &'static str {
        self.origin.file
    }

    pub fn line(&self) -> u32 {
        self.origin.line
    }
}

fn is_constructor_frame(frame: &Frame) -> bool {
    frame.symbol.contains(CONSTRUCTOR_FRAMES)
}

impl Default for FatalError {
    #[track_caller]
    fn default() -> Self {
        Self::raise(None, None, None, Location::caller())
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.parts, f)
    }
}

impl StdError for FatalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.parts.source()
    }
}

impl AnyError for FatalError {
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
        ErrorKind::Fatal
    }

    fn origin(&self) -> Option<Origin> {
        Some(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let err = FatalError::default();
        assert_eq!(err.code(), ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message(), "");
        assert!(err.previous().is_none());
        assert_eq!(err.kind(), ErrorKind::Fatal);
    }

    #[test]
    fn test_origin_is_call_site() {
        let line = line!() + 1;
        let err = FatalError::new("boom");
        assert_eq!(err.line(), line);
        assert!(err.file().ends_with("fatal.rs"));

        let line = line!() + 1;
        let err = FatalError::from_parts(None, Some(ErrorCode::UNAVAILABLE), None);
        assert_eq!(err.origin().map(|o| o.line), Some(line));
    }

    #[test]
    fn test_builder() {
        let prior = FatalError::new("disk gone");
        let err = FatalError::new("cannot persist")
            .with_code(ErrorCode::UNAVAILABLE)
            .with_cause(prior);

        assert_eq!(err.code(), ErrorCode::UNAVAILABLE);
        assert_eq!(err.to_string(), "[UNAVAILABLE (503)] cannot persist");
        assert_eq!(err.source().unwrap().to_string(), "[INTERNAL_ERROR (500)] disk gone");
    }

    #[test]
    fn test_builder_keeps_origin() {
        let line = line!() + 1;
        let err = FatalError::default().with_code(ErrorCode::new(1));
        assert_eq!(err.line(), line);
        assert_eq!(err.code(), ErrorCode::new(1));
    }

    #[test]
    fn test_raise_event_omits_code() {
        let mut line = 0;
        let events = crate::test_support::capture_events(|| {
            line = line!() + 1;
            let err = FatalError::new("x").with_code(ErrorCode::UNAVAILABLE);
            assert_eq!(err.code(), ErrorCode::UNAVAILABLE);
        });
        let event = events
            .iter()
            .find(|e| e.message() == Some("fatal error raised"))
            .unwrap();

        assert_eq!(event.level, tracing::Level::DEBUG);
        assert_eq!(event.field("code"), None);
        assert_eq!(event.field("line"), Some(line.to_string().as_str()));
        assert!(event.field("file").unwrap().ends_with("fatal.rs"));
    }

    #[test]
    fn test_constructor_frames() {
        assert!(is_constructor_frame(&Frame::new("faultline_core::fatal::FatalError::raise")));
        assert!(is_constructor_frame(&Frame::new(
            "<faultline_core::fatal::FatalError as core::default::Default>::default"
        )));
        assert!(is_constructor_frame(&Frame::new("faultline_core::fatal")));
        assert!(!is_constructor_frame(&Frame::new("app::main")));
    }
}
