//! Evaluation engine
//!
//! Stages for one call, all-or-nothing:
//!
//! ```text
//! declared format ──► decode / validate ──► parse ──► per sensor:
//!                                                      resolve type
//!                                                      registry lookup
//!                                                      evaluate
//! ```
//!
//! Any error aborts the call; no partial mapping is returned.

use crate::errors::{LogError, LogResult};
use crate::model::{Classification, EvaluationResult, LogFormat, LogInput, Reference, SensorKind};
use crate::parser::{parse_log_text_with_diagnostics, Diagnostic, DiagnosticKind};
use crate::policy::EvaluationPolicy;
use crate::registry::{definition, validate_sensor_type_and_reference};
use crate::validators::{decode_json_log, is_valid_text_format};

/// Results of one evaluation plus what tolerant parsing dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Verdict per sensor name
    pub results: EvaluationResult,
    /// Dropped lines, readings, sensors and overwritten names
    pub diagnostics: Vec<Diagnostic>,
}

/// Evaluates logs under a fixed policy
#[derive(Debug, Clone, Default)]
pub struct LogEvaluator {
    policy: EvaluationPolicy,
}

impl LogEvaluator {
    /// Evaluator using `policy` for every log
    pub fn new(policy: EvaluationPolicy) -> Self {
        Self { policy }
    }

    /// Active limits
    pub fn policy(&self) -> &EvaluationPolicy {
        &self.policy
    }

    /// Evaluate one log
    pub fn evaluate<'a>(&self, input: impl Into<LogInput<'a>>, format: LogFormat) -> LogResult<Evaluation> {
        let input = input.into();
        log_debug!("evaluating {} log", format);

        match format {
            LogFormat::Json => self.evaluate_json(input),
            LogFormat::Txt => self.evaluate_text(input),
        }
    }

    fn evaluate_json(&self, input: LogInput<'_>) -> LogResult<Evaluation> {
        let document = match input {
            LogInput::Raw(raw) => serde_json::from_str(raw).map_err(|_e| {
                log_debug!("JSON decode failed: {}", _e);
                LogError::invalid_json_format()
            })?,
            LogInput::Structured(value) => value,
        };
        let log = decode_json_log(document)?;

        let mut pass = Pass::new(&self.policy, log.reference, log.diagnostics);
        for sensor in &log.sensors {
            let kind = validate_sensor_type_and_reference(&sensor.sensor_type, &log.reference)?;
            let values: Vec<f64> = sensor.readings.iter().map(|reading| reading.value).collect();
            pass.record(kind, &sensor.name, &values);
        }
        Ok(pass.finish())
    }

    fn evaluate_text(&self, input: LogInput<'_>) -> LogResult<Evaluation> {
        let LogInput::Raw(text) = input else {
            log_debug!("text format declared for a structured document");
            return Err(LogError::invalid_text_format());
        };
        if !is_valid_text_format(text) {
            return Err(LogError::invalid_text_format());
        }
        let parsed = parse_log_text_with_diagnostics(text)?;
        let reference = parsed.contents.reference;

        let mut pass = Pass::new(&self.policy, reference, parsed.diagnostics);
        for sensor in &parsed.contents.sensors {
            let kind = validate_sensor_type_and_reference(sensor.kind.keyword(), &reference)?;
            pass.record(kind, &sensor.name, &sensor.values());
        }
        Ok(pass.finish())
    }
}

struct Pass<'p> {
    policy: &'p EvaluationPolicy,
    reference: Reference,
    results: EvaluationResult,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> Pass<'p> {
    fn new(policy: &'p EvaluationPolicy, reference: Reference, diagnostics: Vec<Diagnostic>) -> Self {
        Self { policy, reference, results: EvaluationResult::new(), diagnostics }
    }

    fn record(&mut self, kind: SensorKind, name: &str, values: &[f64]) {
        let classification: Classification = definition(kind).evaluate(values, &self.reference, self.policy);
        if let Some(_previous) = self.results.insert(name, classification) {
            log_warn!("duplicate sensor name '{}': '{}' replaced by '{}'", name, _previous, classification);
            self.diagnostics.push(Diagnostic::new(
                None,
                DiagnosticKind::DuplicateSensorName,
                format!("sensor '{}' appears more than once; last verdict kept", name),
            ));
        }
    }

    fn finish(self) -> Evaluation {
        log_debug!("evaluated {} sensors", self.results.len());
        Evaluation { results: self.results, diagnostics: self.diagnostics }
    }
}

/// Evaluate a log with the default policy
///
/// `declared_format` is checked first: anything but `json` or `txt` fails
/// with `UnsupportedFormat` whatever the content.
///
/// ```rust
/// use sensorlog_core::{evaluate_log_file, Classification};
///
/// let log = "reference 70.0 45.0 6\nhumidity hum-1\n2007-04-05T22:04 45.2";
/// let results = evaluate_log_file(log, "txt")?;
/// assert_eq!(results.get("hum-1"), Some(Classification::Keep));
/// # Ok::<(), sensorlog_core::LogError>(())
/// ```
pub fn evaluate_log_file<'a>(content: impl Into<LogInput<'a>>, declared_format: &str) -> LogResult<EvaluationResult> {
    let format: LogFormat = declared_format.parse()?;
    LogEvaluator::default()
        .evaluate(content, format)
        .map(|evaluation| evaluation.results)
}
