//! Trace: call stack captured when an error is built
//!
//! Frames are read back out of `std::backtrace::Backtrace`'s rendering, which
//! is the only stable way to get at symbol and location data.
use crate::config::{trace_policy, TracePolicy};
use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

/// Symbol prefixes that belong to the capture machinery itself
const CAPTURE_FRAMES: &[&str] = &["std::backtrace", "faultline_core::trace::Trace::capture"];

/// One step of a captured call stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Demangled function name
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl Frame {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            file: None,
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32, column: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Fill in the location from a `path:line:column` string
    fn set_location(&mut self, location: &str) {
        let mut parts = location.rsplitn(3, ':');
        let column = parts.next().and_then(|c| c.parse().ok());
        let line = parts.next().and_then(|l| l.parse().ok());
        match (parts.next(), line, column) {
            (Some(file), Some(line), Some(column)) => {
                self.file = Some(file.to_string());
                self.line = Some(line);
                self.column = Some(column);
            }
            _ => self.file = Some(location.to_string()),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        if let Some(file) = &self.file {
            write!(f, " at {}", file)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
            }
            if let Some(column) = self.column {
                write!(f, ":{}", column)?;
            }
        }
        Ok(())
    }
}

/// Captured call stack, innermost frame first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    /// Capture the current stack under the process-wide policy
    #[inline(never)]
    pub fn capture() -> Self {
        Self::capture_with(trace_policy())
    }

    #[inline(never)]
    pub fn capture_with(policy: TracePolicy) -> Self {
        if !policy.captures() {
            tracing::trace!("stack trace capture disabled");
            return Self::empty();
        }

        let backtrace = Backtrace::force_capture();
        if backtrace.status() != BacktraceStatus::Captured {
            tracing::trace!(status = ?backtrace.status(), "stack trace unavailable");
            return Self::empty();
        }

        let mut trace = Self::parse(&backtrace.to_string());
        trace.drop_leading(|frame| CAPTURE_FRAMES.iter().any(|p| frame.symbol.starts_with(p)));
        trace
    }

    pub fn empty() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Parse the default (short) rendering of a `std::backtrace::Backtrace`.
    ///
    /// Numbered lines start a frame, `at` lines locate the preceding one and
    /// any other line is an inlined symbol sharing the previous frame slot.
    pub fn parse(rendered: &str) -> Self {
        let mut frames: Vec<Frame> = Vec::new();

        for line in rendered.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(location) = line.strip_prefix("at ") {
                if let Some(frame) = frames.last_mut() {
                    frame.set_location(location);
                }
                continue;
            }

            let symbol = match line.split_once(": ") {
                Some((index, symbol)) if index.bytes().all(|b| b.is_ascii_digit()) => symbol,
                _ => line,
            };
            frames.push(Frame::new(symbol));
        }

        Self { frames }
    }

    /// Drop leading frames matching `predicate`, keeping everything from the
    /// first non-matching frame on
    pub(crate) fn drop_leading(&mut self, predicate: impl Fn(&Frame) -> bool) {
        let skip = self.frames.iter().take_while(|f| predicate(*f)).count();
        self.frames.drain(..skip);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "#{} {}", i, frame)?;
        }
        Ok(())
    }
}
