use core::fmt;

use serde::Serialize;

/// Why a line or item was left out of the parsed log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Line outside any sensor block
    UnrecognizedLine,
    /// Reading that failed the reading grammar
    MalformedReading,
    /// Sensor dropped because none of its readings survived
    EmptySensor,
    /// Sensor name seen before; the later verdict replaced the earlier one
    DuplicateSensorName,
}

/// Record of data dropped by tolerant parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line, when the input was line oriented
    pub line: Option<usize>,
    /// What was dropped
    pub kind: DiagnosticKind,
    /// Human-readable description
    pub detail: String,
}

impl Diagnostic {
    /// Build a diagnostic, `line` is `None` for JSON input
    pub fn new(line: Option<usize>, kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self { line, kind, detail: detail.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.detail),
            None => f.write_str(&self.detail),
        }
    }
}
