//! Text Log Parser
//!
//! ## Input Shape
//!
//! ```text
//! reference 70.0 45.0 6
//! thermometer temp-1
//! 2007-04-05T22:00 72.4
//! 2007-04-05T22:01 76.0
//! humidity hum-1
//! 2007-04-05T22:04 45.2
//! ```
//!
//! ## Tolerance
//!
//! The reference line is strict: a malformed one aborts parsing. Everything
//! after it is tolerant:
//!
//! - a line whose first token is a sensor keyword opens a block, and every
//!   line up to the next such line is a reading candidate for it
//! - candidates failing the reading grammar are dropped
//! - a block left with no readings is dropped
//! - lines before the first block are skipped
//!
//! Nothing dropped is lost silently: [`parse_log_text_with_diagnostics`]
//! returns one [`Diagnostic`] per dropped line or sensor.
//!
//! ```rust
//! use sensorlog_core::parser::parse_log_text;
//!
//! let log = parse_log_text("reference 70.0 45.0 6\nthermometer temp-1\n2023-05-12T12:00 22.5")?;
//! assert_eq!(log.reference.temperature, 70.0);
//! assert_eq!(log.sensors[0].name, "temp-1");
//! assert_eq!(log.sensors[0].readings[0].value, 22.5);
//! # Ok::<(), sensorlog_core::LogError>(())
//! ```

mod diagnostics;
mod reference;
mod sensor;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use reference::parse_reference;
pub use sensor::parse_sensor;

use crate::errors::{LogError, LogResult};
use crate::model::LogContents;
use crate::validators::grammar::{header_keyword, logical_lines};

use sensor::parse_sensor_block;

/// Parsed log plus a record of everything tolerant parsing dropped
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLog {
    /// Reference and surviving sensors
    pub contents: LogContents,
    /// One entry per dropped line or sensor
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse raw log text into structured contents
pub fn parse_log_text(input: &str) -> LogResult<LogContents> {
    parse_log_text_with_diagnostics(input).map(|parsed| parsed.contents)
}

/// Parse raw log text, keeping diagnostics for dropped lines
pub fn parse_log_text_with_diagnostics(input: &str) -> LogResult<ParsedLog> {
    let lines = logical_lines(input);
    let (first, rest) = lines.split_first().ok_or_else(LogError::invalid_reference_format)?;
    let reference = parse_reference(first.text)?;

    let mut sensors = Vec::new();
    let mut diagnostics = Vec::new();
    let mut cursor = 0;

    while cursor < rest.len() {
        let line = rest[cursor];
        cursor += 1;

        if header_keyword(line.text).is_none() {
            log_warn!("skipping unrecognized line {}: {}", line.number, line.text);
            diagnostics.push(Diagnostic::new(
                Some(line.number),
                DiagnosticKind::UnrecognizedLine,
                format!("unrecognized line '{}'", line.text),
            ));
            continue;
        }

        let block_start = cursor;
        while cursor < rest.len() && header_keyword(rest[cursor].text).is_none() {
            cursor += 1;
        }

        if let Some(sensor) = parse_sensor_block(line, &rest[block_start..cursor], &mut diagnostics)? {
            sensors.push(sensor);
        }
    }

    log_debug!("parsed {} sensors, {} diagnostics", sensors.len(), diagnostics.len());

    Ok(ParsedLog {
        contents: LogContents { reference, sensors },
        diagnostics,
    })
}
