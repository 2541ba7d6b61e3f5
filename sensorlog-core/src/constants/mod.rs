//! Constants for SensorLog Core
//!
//! Numeric limits used by the evaluators, grouped by domain so no magic
//! numbers appear in evaluation code:
//!
//! - **Sensors**: per-kind thresholds and precision bands
//!
//! The defaults of [`EvaluationPolicy`](crate::policy::EvaluationPolicy) are
//! taken from here.

/// Per-sensor thresholds and thermometer precision bands.
pub mod sensors;

pub use sensors::{
    HUMIDITY_THRESHOLD, MONOXIDE_THRESHOLD,
    THERMOMETER_MEAN_TOLERANCE, THERMOMETER_ULTRA_STDDEV, THERMOMETER_VERY_STDDEV,
};
