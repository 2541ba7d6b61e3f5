//! JSON document validation
//!
//! Two passes over an already decoded `serde_json::Value`:
//!
//! 1. [`is_valid_json_format`] checks the `reference` record: all three
//!    fields must be JSON numbers.
//! 2. [`decode_json_log`] checks every sensor item (string `type`, non-empty
//!    string `name`, `readings` of `{timestamp, value}`) before anything is
//!    evaluated, so a malformed item fails up front instead of mid-evaluation.
//!
//! The sensor `type` string is kept raw here. Resolving it against the
//! registry happens during evaluation, where unknown kinds raise
//! `UnrecognizedSensor`.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{LogError, LogResult};
use crate::model::{Reading, Reference};
use crate::parser::{Diagnostic, DiagnosticKind};
use crate::time::is_valid_timestamp;

const REFERENCE_FIELDS: [&str; 3] = ["temperature", "humidity", "monoxide"];

/// Check that `data.reference` holds three numeric fields
pub fn is_valid_json_format(data: &Value) -> bool {
    let Some(reference) = data.get("reference") else {
        return false;
    };
    REFERENCE_FIELDS
        .iter()
        .all(|field| reference.get(field).map_or(false, Value::is_number))
}

/// Sensor item as it appears in a JSON log, type not yet resolved
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonSensor {
    #[serde(rename = "type")]
    /// Raw `type` string, resolved during evaluation
    pub sensor_type: String,
    /// Non-empty sensor name
    pub name: String,
    /// Readings with valid timestamps
    pub readings: Vec<Reading>,
}

/// JSON log with checked items
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLog {
    /// Reference record
    pub reference: Reference,
    /// Sensors that kept at least one reading
    pub sensors: Vec<JsonSensor>,
    /// Dropped readings and sensors
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Deserialize)]
struct RawJsonLog {
    reference: Reference,
    #[serde(default)]
    sensors: Vec<JsonSensor>,
}

/// Decode a shape-checked document into typed sensor items
///
/// Readings with a malformed timestamp are dropped, and sensors left without
/// readings are dropped too; both are reported as diagnostics.
pub fn decode_json_log(data: Value) -> LogResult<JsonLog> {
    if !is_valid_json_format(&data) {
        return Err(LogError::invalid_json_format());
    }

    let raw: RawJsonLog = serde_json::from_value(data).map_err(|_e| {
        log_debug!("JSON sensor items rejected: {}", _e);
        LogError::invalid_json_format()
    })?;

    let mut diagnostics = Vec::new();
    let mut sensors = Vec::with_capacity(raw.sensors.len());

    for mut sensor in raw.sensors {
        if sensor.name.is_empty() {
            log_debug!("JSON sensor item of type '{}' has an empty name", sensor.sensor_type);
            return Err(LogError::invalid_json_format());
        }

        let name = &sensor.name;
        sensor.readings.retain(|reading| {
            let keep = is_valid_timestamp(&reading.timestamp);
            if !keep {
                diagnostics.push(Diagnostic::new(
                    None,
                    DiagnosticKind::MalformedReading,
                    format!("sensor '{}': invalid timestamp '{}'", name, reading.timestamp),
                ));
            }
            keep
        });

        if sensor.readings.is_empty() {
            diagnostics.push(Diagnostic::new(
                None,
                DiagnosticKind::EmptySensor,
                format!("sensor '{}' has no valid readings", sensor.name),
            ));
            continue;
        }
        sensors.push(sensor);
    }

    Ok(JsonLog { reference: raw.reference, sensors, diagnostics })
}
