//! Shared fixtures for integration tests
//!
//! - the six-sensor sample log in both input formats, with its verdicts
//! - a generator for large synthetic logs

#![allow(dead_code)]

use std::fmt::Write;

use serde_json::{json, Value};

use sensorlog_core::Classification;

/// Sample log covering every sensor kind and verdict except "very precise"
pub const SAMPLE_TEXT_LOG: &str = "\
reference 70.0 45.0 6
thermometer temp-1
2007-04-05T22:00 72.4
2007-04-05T22:01 76.0
2007-04-05T22:02 79.1
2007-04-05T22:03 75.6
2007-04-05T22:04 71.2
2007-04-05T22:05 71.4
2007-04-05T22:06 69.2
2007-04-05T22:07 65.2
2007-04-05T22:08 62.8
2007-04-05T22:09 61.4
2007-04-05T22:10 64.0
2007-04-05T22:11 67.5
2007-04-05T22:12 69.4
thermometer temp-2
2007-04-05T22:01 69.5
2007-04-05T22:02 70.1
2007-04-05T22:03 71.3
2007-04-05T22:04 71.5
2007-04-05T22:05 69.8
humidity hum-1
2007-04-05T22:04 45.2
2007-04-05T22:05 45.3
2007-04-05T22:06 45.1
humidity hum-2
2007-04-05T22:04 44.4
2007-04-05T22:05 43.9
2007-04-05T22:06 44.9
2007-04-05T22:07 43.8
2007-04-05T22:08 42.1
monoxide mon-1
2007-04-05T22:04 5
2007-04-05T22:05 7
2007-04-05T22:06 9
monoxide mon-2
2007-04-05T22:04 2
2007-04-05T22:05 4
2007-04-05T22:06 10
2007-04-05T22:07 8
2007-04-05T22:08 6
";

/// Expected verdicts for the sample log, in name order
pub const SAMPLE_VERDICTS: [(&str, Classification); 6] = [
    ("hum-1", Classification::Keep),
    ("hum-2", Classification::Discard),
    ("mon-1", Classification::Keep),
    ("mon-2", Classification::Discard),
    ("temp-1", Classification::Precise),
    ("temp-2", Classification::UltraPrecise),
];

/// The sample log as a JSON document
pub fn sample_json_log() -> Value {
    let mut sensors = Vec::new();
    let mut current: Option<Value> = None;

    for line in SAMPLE_TEXT_LOG.lines().skip(1) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [timestamp, value] if timestamp.starts_with("20") => {
                let value: f64 = value.parse().unwrap();
                current.as_mut().unwrap()["readings"]
                    .as_array_mut()
                    .unwrap()
                    .push(json!({"timestamp": timestamp, "value": value}));
            }
            [kind, name] => {
                sensors.extend(current.take());
                current = Some(json!({"type": kind, "name": name, "readings": []}));
            }
            _ => unreachable!("fixture line: {line}"),
        }
    }
    sensors.extend(current);

    json!({
        "reference": {"temperature": 70.0, "humidity": 45.0, "monoxide": 6.0},
        "sensors": sensors,
    })
}

/// Text log with `sensors` sensors cycling through every kind
///
/// Each sensor gets `readings_per_sensor` readings close to its reference.
pub fn synthetic_text_log(sensors: usize, readings_per_sensor: usize) -> String {
    let mut log = String::from("reference 70.0 45.0 6\n");
    for index in 0..sensors {
        let (kind, base) = match index % 3 {
            0 => ("thermometer", 70.0),
            1 => ("humidity", 45.0),
            _ => ("monoxide", 6.0),
        };
        writeln!(log, "{kind} sensor-{index}").unwrap();
        for minute in 0..readings_per_sensor {
            let jitter = ((index + minute) % 5) as f64 * 0.1 - 0.2;
            writeln!(log, "2024-01-01T{:02}:{:02} {:.1}", (minute / 60) % 24, minute % 60, base + jitter).unwrap();
        }
    }
    log
}
