//! Error Types for Log Evaluation Failures
//!
//! ## Design
//!
//! Every failure aborts the whole evaluation: a malformed file yields an error,
//! never a best-effort subset of results. The `Display` text of each variant is
//! shown verbatim to the end user, so the messages are kept short and stable.
//!
//! Strictness is two-tier:
//!
//! - **Coarse grain (strict)**: a malformed reference line, sensor header,
//!   document shape or declared format raises one of the variants below.
//! - **Fine grain (tolerant)**: an individual malformed reading is dropped and
//!   reported as a [`Diagnostic`](crate::parser::Diagnostic), never raised.
//!
//! ## Error Categories
//!
//! - `Format`: structural shape violation (reference line, text grammar, header)
//! - `Data`: values present but not numeric where required
//! - `UnrecognizedSensor`: sensor type outside the registry
//! - `Parse`: the raw JSON document is not valid JSON or has the wrong shape
//! - `UnsupportedFormat`: declared format is neither `json` nor `txt`
//!
//! ```rust
//! use sensorlog_core::{evaluate_log_file, LogError};
//!
//! match evaluate_log_file("random data", "txt") {
//!     Ok(results) => println!("{} sensors evaluated", results.len()),
//!     Err(LogError::Format(message)) => assert_eq!(message, "Invalid text format"),
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for parsing and evaluation operations
pub type LogResult<T> = Result<T, LogError>;

/// Message for a reference line with the wrong shape
pub const INVALID_REFERENCE_FORMAT: &str = "Invalid reference format";

/// Message for a reference line with non-numeric values
pub const INVALID_REFERENCE_DATA: &str = "Invalid reference data: expected numeric values";

/// Message for a text log rejected by the grammar validator
pub const INVALID_TEXT_FORMAT: &str = "Invalid text format";

/// Message for a JSON document that cannot be decoded or has the wrong shape
pub const INVALID_JSON_FORMAT: &str = "Invalid JSON format";

/// Message for a declared format outside `json`/`txt`
pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type";

/// Errors raised while validating, parsing or evaluating a sensor log
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// Structural shape violation
    #[error("{0}")]
    Format(String),

    /// Values present but not parseable as numbers
    #[error("{0}")]
    Data(String),

    /// Sensor type is not one of the registered kinds
    #[error("Unrecognized sensor type: '{0}'")]
    UnrecognizedSensor(String),

    /// JSON document is syntactically invalid or has the wrong shape
    #[error("{0}")]
    Parse(String),

    /// Declared format is not supported
    #[error("{0}")]
    UnsupportedFormat(String),
}

impl LogError {
    pub(crate) fn invalid_reference_format() -> Self {
        Self::Format(INVALID_REFERENCE_FORMAT.to_string())
    }

    pub(crate) fn invalid_reference_data() -> Self {
        Self::Data(INVALID_REFERENCE_DATA.to_string())
    }

    pub(crate) fn invalid_text_format() -> Self {
        Self::Format(INVALID_TEXT_FORMAT.to_string())
    }

    pub(crate) fn invalid_sensor_header(line: &str) -> Self {
        Self::Format(format!("Invalid sensor header: '{}'", line))
    }

    pub(crate) fn invalid_json_format() -> Self {
        Self::Parse(INVALID_JSON_FORMAT.to_string())
    }

    pub(crate) fn unsupported_format() -> Self {
        Self::UnsupportedFormat(UNSUPPORTED_FILE_TYPE.to_string())
    }

    /// Stable error code for programmatic handling
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Format(_) => "FORMAT_ERROR",
            Self::Data(_) => "DATA_ERROR",
            Self::UnrecognizedSensor(_) => "UNRECOGNIZED_SENSOR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
        }
    }
}
