//! Core evaluation engine for SensorLog
//!
//! Turns a sensor log (JSON document or line-oriented text) into one
//! reliability verdict per sensor.
//!
//! Pipeline:
//! - validate the document's structure for its declared format
//! - parse it into a reference record and named sensors
//! - classify each sensor against its reference value
//!
//! ```rust
//! use sensorlog_core::{evaluate_log_file, Classification};
//!
//! let log = "\
//! reference 70.0 45.0 6
//! thermometer temp-1
//! 2007-04-05T22:00 70.1
//! 2007-04-05T22:01 69.9
//! monoxide mon-1
//! 2007-04-05T22:00 12";
//!
//! let results = evaluate_log_file(log, "txt")?;
//! assert_eq!(results.get("temp-1"), Some(Classification::UltraPrecise));
//! assert_eq!(results.get("mon-1"), Some(Classification::Discard));
//! # Ok::<(), sensorlog_core::LogError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

pub mod constants;
pub mod engine;
pub mod errors;
pub mod evaluators;
pub mod model;
pub mod parser;
pub mod policy;
pub mod registry;
pub mod time;
pub mod validators;

// Public API
pub use engine::{evaluate_log_file, Evaluation, LogEvaluator};
pub use errors::{LogError, LogResult};
pub use model::{
    Classification, EvaluationResult, LogContents, LogFormat, LogInput, Reading, Reference, Sensor, SensorKind,
};
pub use parser::{parse_log_text, parse_log_text_with_diagnostics, Diagnostic, DiagnosticKind, ParsedLog};
pub use policy::{EvaluationPolicy, ThermometerBands};
pub use time::is_valid_timestamp;
pub use validators::{is_valid_json_format, is_valid_text_format};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
