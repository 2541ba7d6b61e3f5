//! Evaluation policy
//!
//! Numeric limits the evaluators compare readings against. The default policy
//! reproduces the fixed limits in [`constants::sensors`](crate::constants::sensors);
//! presets and JSON files adjust them without touching evaluation code.
//!
//! ```rust
//! use sensorlog_core::EvaluationPolicy;
//!
//! let policy = EvaluationPolicy::from_json_str(r#"{"humidity_threshold": 2.0}"#)?;
//! assert_eq!(policy.humidity_threshold, 2.0);
//! assert_eq!(policy.monoxide_threshold, 3.0);
//! # Ok::<(), sensorlog_core::policy::PolicyError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::constants::{
    HUMIDITY_THRESHOLD, MONOXIDE_THRESHOLD, THERMOMETER_MEAN_TOLERANCE, THERMOMETER_ULTRA_STDDEV,
    THERMOMETER_VERY_STDDEV,
};

/// Failure to load a policy file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// File could not be read
    #[error("cannot read policy file '{path}': {reason}")]
    Io {
        /// Path as given
        path: String,
        /// Underlying I/O error
        reason: String,
    },

    /// Malformed JSON, unknown field or out-of-range limit
    #[error("invalid policy: {0}")]
    Invalid(String),
}

/// Thermometer precision bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThermometerBands {
    /// Largest |mean - reference| eligible for the two upper verdicts
    pub mean_tolerance: f64,
    /// Spread below this is "ultra precise"
    pub ultra_stddev: f64,
    /// Spread below this (and not ultra) is "very precise"
    pub very_stddev: f64,
}

impl Default for ThermometerBands {
    fn default() -> Self {
        Self {
            mean_tolerance: THERMOMETER_MEAN_TOLERANCE,
            ultra_stddev: THERMOMETER_ULTRA_STDDEV,
            very_stddev: THERMOMETER_VERY_STDDEV,
        }
    }
}

/// Limits used for every sensor kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationPolicy {
    /// Max deviation of any humidity reading (%RH)
    pub humidity_threshold: f64,
    /// Max deviation of any monoxide reading (ppm)
    pub monoxide_threshold: f64,
    /// Thermometer precision bands
    pub thermometer: ThermometerBands,
}

impl Default for EvaluationPolicy {
    fn default() -> Self {
        Self {
            humidity_threshold: HUMIDITY_THRESHOLD,
            monoxide_threshold: MONOXIDE_THRESHOLD,
            thermometer: ThermometerBands::default(),
        }
    }
}

impl EvaluationPolicy {
    /// Tighter limits for calibration runs
    pub fn strict() -> Self {
        Self {
            humidity_threshold: 0.5,
            monoxide_threshold: 1.5,
            thermometer: ThermometerBands {
                mean_tolerance: 0.25,
                ultra_stddev: 1.5,
                very_stddev: 3.0,
            },
        }
    }

    /// Looser limits for noisy field deployments
    pub fn lenient() -> Self {
        Self {
            humidity_threshold: 2.0,
            monoxide_threshold: 5.0,
            thermometer: ThermometerBands {
                mean_tolerance: 1.0,
                ultra_stddev: 4.0,
                very_stddev: 7.0,
            },
        }
    }

    /// Parse a policy from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json).map_err(|e| PolicyError::Invalid(e.to_string()))?;
        policy.check()?;
        Ok(policy)
    }

    /// Load a policy from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| PolicyError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    fn check(&self) -> Result<(), PolicyError> {
        let limits = [
            ("humidity_threshold", self.humidity_threshold),
            ("monoxide_threshold", self.monoxide_threshold),
            ("thermometer.mean_tolerance", self.thermometer.mean_tolerance),
            ("thermometer.ultra_stddev", self.thermometer.ultra_stddev),
            ("thermometer.very_stddev", self.thermometer.very_stddev),
        ];
        if let Some((field, _)) = limits.iter().find(|(_, value)| !value.is_finite() || *value < 0.0) {
            return Err(PolicyError::Invalid(format!("{field} must be a finite, non-negative number")));
        }
        if self.thermometer.ultra_stddev > self.thermometer.very_stddev {
            return Err(PolicyError::Invalid(
                "thermometer.ultra_stddev must not exceed thermometer.very_stddev".into(),
            ));
        }
        Ok(())
    }
}
