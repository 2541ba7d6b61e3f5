//! Sensor block parsing
//!
//! A block is a header line plus the candidate reading lines that follow it.
//! Bad readings are dropped one by one; a bad header fails the whole log.

use crate::errors::{LogError, LogResult};
use crate::model::Sensor;
use crate::validators::grammar::{parse_header, parse_reading, Line};

use super::diagnostics::{Diagnostic, DiagnosticKind};

/// Parse one sensor block
///
/// Returns `Ok(None)` when no reading survives; such sensors are omitted from
/// the log rather than kept with an empty reading list.
pub fn parse_sensor(header: &str, reading_lines: &[&str]) -> LogResult<Option<Sensor>> {
    let header = Line { number: 0, text: header.trim() };
    let lines: Vec<Line<'_>> = reading_lines
        .iter()
        .map(|text| Line { number: 0, text: text.trim() })
        .collect();
    let mut diagnostics = Vec::new();
    parse_sensor_block(header, &lines, &mut diagnostics)
}

pub(crate) fn parse_sensor_block(
    header: Line<'_>,
    reading_lines: &[Line<'_>],
    diagnostics: &mut Vec<Diagnostic>,
) -> LogResult<Option<Sensor>> {
    let (kind, name) = parse_header(header.text).ok_or_else(|| LogError::invalid_sensor_header(header.text))?;

    let mut readings = Vec::with_capacity(reading_lines.len());
    for line in reading_lines {
        match parse_reading(line.text) {
            Some(reading) => readings.push(reading),
            None => {
                log_warn!("dropping malformed reading for '{}' at line {}: {}", name, line.number, line.text);
                diagnostics.push(Diagnostic::new(
                    line_number(line),
                    DiagnosticKind::MalformedReading,
                    format!("sensor '{}': malformed reading '{}'", name, line.text),
                ));
            }
        }
    }

    if readings.is_empty() {
        log_warn!("dropping sensor '{}': no valid readings", name);
        diagnostics.push(Diagnostic::new(
            line_number(&header),
            DiagnosticKind::EmptySensor,
            format!("sensor '{}' has no valid readings", name),
        ));
        return Ok(None);
    }

    Ok(Some(Sensor { kind, name: name.to_string(), readings }))
}

fn line_number(line: &Line<'_>) -> Option<usize> {
    (line.number > 0).then_some(line.number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Reading, SensorKind};

    #[test]
    fn parses_header_and_readings() {
        let sensor = parse_sensor(
            "humidity hum-1\r",
            &["2007-04-05T22:04 45.2", "2007-04-05T22:05 45.3"],
        )
        .unwrap()
        .unwrap();
        assert_eq!(sensor.kind, SensorKind::Humidity);
        assert_eq!(sensor.name, "hum-1");
        assert_eq!(
            sensor.readings,
            vec![
                Reading { timestamp: "2007-04-05T22:04".into(), value: 45.2 },
                Reading { timestamp: "2007-04-05T22:05".into(), value: 45.3 },
            ]
        );
    }

    #[test]
    fn invalid_timestamp_drops_sensor() {
        assert_eq!(parse_sensor("thermometer temp-1", &["2007-04-05T25:01 72.4"]), Ok(None));
    }

    #[test]
    fn non_numeric_value_drops_sensor() {
        assert_eq!(parse_sensor("thermometer temp-1", &["2007-04-05T22:01 abc"]), Ok(None));
    }

    #[test]
    fn keeps_valid_readings_around_bad_ones() {
        let sensor = parse_sensor(
            "monoxide mon-1",
            &["2007-04-05T22:01 5", "garbage", "2007-04-05T22:02 6 7", "2007-04-05T22:03 7"],
        )
        .unwrap()
        .unwrap();
        assert_eq!(sensor.values(), vec![5.0, 7.0]);
    }

    #[test]
    fn malformed_header_is_format_error() {
        for header in ["thermometer", "thermometer temp-1 extra", "thermometer temp"] {
            assert!(
                matches!(parse_sensor(header, &["2007-04-05T22:01 72.4"]), Err(LogError::Format(_))),
                "header: {header:?}"
            );
        }
    }

    #[test]
    fn dropped_lines_are_reported() {
        let header = Line { number: 2, text: "thermometer temp-1" };
        let lines = [Line { number: 3, text: "2007-04-05T22:01 abc" }];
        let mut diagnostics = Vec::new();

        assert_eq!(parse_sensor_block(header, &lines, &mut diagnostics), Ok(None));
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].line, Some(3));
        assert_eq!(diagnostics[0].kind, DiagnosticKind::MalformedReading);
        assert_eq!(diagnostics[1].line, Some(2));
        assert_eq!(diagnostics[1].kind, DiagnosticKind::EmptySensor);
    }
}
