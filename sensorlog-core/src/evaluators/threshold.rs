//! Threshold evaluation for humidity and monoxide sensors

use crate::model::Classification;
use crate::policy::EvaluationPolicy;

/// `Discard` if any reading deviates from `reference` by more than `threshold`
///
/// Stops at the first violation. A reading exactly `threshold` away is kept.
pub fn evaluate_readings_against_threshold(readings: &[f64], reference: f64, threshold: f64) -> Classification {
    if readings.iter().any(|reading| (reading - reference).abs() > threshold) {
        Classification::Discard
    } else {
        Classification::Keep
    }
}

/// Humidity readings against the policy's humidity threshold
pub fn evaluate_humidity_with_policy(readings: &[f64], reference: f64, policy: &EvaluationPolicy) -> Classification {
    evaluate_readings_against_threshold(readings, reference, policy.humidity_threshold)
}

/// Monoxide readings against the policy's monoxide threshold
pub fn evaluate_monoxide_with_policy(readings: &[f64], reference: f64, policy: &EvaluationPolicy) -> Classification {
    evaluate_readings_against_threshold(readings, reference, policy.monoxide_threshold)
}
