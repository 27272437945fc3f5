//! Trace capture configuration
//!
//! Capturing a stack trace is the only costly part of building an error.
//! `FAULTLINE_TRACE=off` turns it off process-wide.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`TracePolicy::from_env`]
pub const TRACE_ENV: &str = "FAULTLINE_TRACE";

/// Whether error constructors capture a stack trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracePolicy {
    #[default]
    Capture,
    Disabled,
}

impl TracePolicy {
    /// Parse a policy value. Unrecognised values mean `Capture`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "0" | "off" | "false" | "none" | "disabled" => TracePolicy::Disabled,
            _ => TracePolicy::Capture,
        }
    }

    pub fn from_env() -> Self {
        std::env::var(TRACE_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    pub fn captures(self) -> bool {
        self == TracePolicy::Capture
    }
}

static POLICY: Lazy<TracePolicy> = Lazy::new(TracePolicy::from_env);

/// Process-wide policy, read from the environment on first use
pub fn trace_policy() -> TracePolicy {
    *POLICY
}
