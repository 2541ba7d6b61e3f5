//! Log data model
//!
//! Everything here is created fresh for one evaluation call and discarded
//! afterwards. Nothing is cached or shared between calls.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{LogError, LogResult};

/// Baseline environmental values a log declares up front
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Expected temperature
    pub temperature: f64,
    /// Expected relative humidity
    pub humidity: f64,
    /// Expected carbon monoxide level
    pub monoxide: f64,
}

/// One timestamped observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// `YYYY-MM-DDTHH:MM`
    pub timestamp: String,
    /// Observed value
    pub value: f64,
}

/// Closed set of supported sensor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Temperature sensor, graded on precision
    Thermometer,
    /// Relative humidity sensor, kept or discarded
    Humidity,
    /// Carbon monoxide detector, kept or discarded
    Monoxide,
}

impl SensorKind {
    /// All kinds, in registry order
    pub const ALL: [SensorKind; 3] = [Self::Thermometer, Self::Humidity, Self::Monoxide];

    /// Keyword used in logs
    pub const fn keyword(&self) -> &'static str {
        match self {
            SensorKind::Thermometer => "thermometer",
            SensorKind::Humidity => "humidity",
            SensorKind::Monoxide => "monoxide",
        }
    }

    /// Resolve a keyword, `None` if it is not a known kind
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for SensorKind {
    type Err = LogError;

    fn from_str(s: &str) -> LogResult<Self> {
        Self::from_keyword(s).ok_or_else(|| LogError::UnrecognizedSensor(s.to_string()))
    }
}

/// A named sensor and its surviving readings (never empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Sensor kind, `type` in JSON
    #[serde(rename = "type")]
    pub kind: SensorKind,
    /// Identifier from the header, e.g. `temp-1`
    pub name: String,
    /// Readings in log order
    pub readings: Vec<Reading>,
}

impl Sensor {
    /// Reading values in log order
    pub fn values(&self) -> Vec<f64> {
        self.readings.iter().map(|reading| reading.value).collect()
    }
}

/// Root aggregate produced by parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogContents {
    /// Baseline declared by the log
    pub reference: Reference,
    /// Sensors in parse order
    pub sensors: Vec<Sensor>,
}

/// Declared input encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `json`
    Json,
    /// `txt`
    Txt,
}

impl LogFormat {
    /// Tag as declared by callers
    pub const fn tag(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> LogResult<Self> {
        match s {
            "json" => Ok(LogFormat::Json),
            "txt" => Ok(LogFormat::Txt),
            _ => Err(LogError::unsupported_format()),
        }
    }
}

/// Raw file content or an already decoded JSON document
#[derive(Debug, Clone)]
pub enum LogInput<'a> {
    /// Undecoded file content
    Raw(&'a str),
    /// Document already decoded by the caller
    Structured(serde_json::Value),
}

impl<'a> From<&'a str> for LogInput<'a> {
    fn from(raw: &'a str) -> Self {
        LogInput::Raw(raw)
    }
}

impl<'a> From<&'a String> for LogInput<'a> {
    fn from(raw: &'a String) -> Self {
        LogInput::Raw(raw.as_str())
    }
}

impl From<serde_json::Value> for LogInput<'_> {
    fn from(value: serde_json::Value) -> Self {
        LogInput::Structured(value)
    }
}

/// Reliability verdict for one sensor
///
/// Threshold sensors yield `Keep`/`Discard`; thermometers yield one of the
/// three precision levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Every reading within the threshold
    #[serde(rename = "keep")]
    Keep,
    /// At least one reading outside the threshold
    #[serde(rename = "discard")]
    Discard,
    /// Mean off the reference or spread too wide
    #[serde(rename = "precise")]
    Precise,
    /// Mean on the reference, moderate spread
    #[serde(rename = "very precise")]
    VeryPrecise,
    /// Mean on the reference, tight spread
    #[serde(rename = "ultra precise")]
    UltraPrecise,
}

impl Classification {
    /// Label used in output
    pub const fn as_str(&self) -> &'static str {
        match self {
            Classification::Keep => "keep",
            Classification::Discard => "discard",
            Classification::Precise => "precise",
            Classification::VeryPrecise => "very precise",
            Classification::UltraPrecise => "ultra precise",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sensor name to classification, serialized as a flat JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationResult(BTreeMap<String, Classification>);

impl EvaluationResult {
    /// Empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, classification: Classification) -> Option<Classification> {
        self.0.insert(name.into(), classification)
    }

    /// Verdict recorded for `name`
    pub fn get(&self, name: &str) -> Option<Classification> {
        self.0.get(name).copied()
    }

    /// Number of sensors with a verdict
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No sensor was evaluated
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Verdicts ordered by sensor name
    pub fn iter(&self) -> impl Iterator<Item = (&str, Classification)> {
        self.0.iter().map(|(name, classification)| (name.as_str(), *classification))
    }
}
