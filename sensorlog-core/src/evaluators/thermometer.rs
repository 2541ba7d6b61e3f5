//! Thermometer precision classification
//!
//! Two numbers decide the verdict:
//!
//! ```text
//! magnitude = |mean(readings) - reference|
//! spread    = population standard deviation of readings
//!
//! magnitude <= 0.5 and spread < 3        -> ultra precise
//! magnitude <= 0.5 and 3 <= spread < 5   -> very precise
//! anything else                          -> precise
//! ```

use crate::model::Classification;
use crate::policy::{EvaluationPolicy, ThermometerBands};

use super::utils::{compute_mean, compute_standard_deviation};

/// Classify thermometer readings with the default bands
pub fn evaluate_thermometer(readings: &[f64], reference: f64) -> Classification {
    evaluate_thermometer_with_bands(readings, reference, &ThermometerBands::default())
}

/// Classify thermometer readings with the bands of `policy`
pub fn evaluate_thermometer_with_policy(readings: &[f64], reference: f64, policy: &EvaluationPolicy) -> Classification {
    evaluate_thermometer_with_bands(readings, reference, &policy.thermometer)
}

/// Classify thermometer readings with explicit bands
pub fn evaluate_thermometer_with_bands(readings: &[f64], reference: f64, bands: &ThermometerBands) -> Classification {
    if readings.is_empty() {
        return Classification::Precise;
    }

    let magnitude = (compute_mean(readings) - reference).abs();
    let spread = compute_standard_deviation(readings);

    if magnitude <= bands.mean_tolerance {
        if spread < bands.ultra_stddev {
            return Classification::UltraPrecise;
        }
        if spread < bands.very_stddev {
            return Classification::VeryPrecise;
        }
    }

    Classification::Precise
}
