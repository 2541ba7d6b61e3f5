//! Sensor Evaluation Limits
//!
//! Default limits for classifying each sensor kind against the log's
//! reference value.

// ===== THRESHOLD SENSORS =====

/// Maximum allowed deviation of any humidity reading from the reference (%RH).
///
/// A single reading further away than this discards the sensor.
pub const HUMIDITY_THRESHOLD: f64 = 1.0;

/// Maximum allowed deviation of any monoxide reading from the reference (ppm).
pub const MONOXIDE_THRESHOLD: f64 = 3.0;

// ===== THERMOMETER PRECISION BANDS =====

/// Largest |mean − reference| still eligible for "very"/"ultra" precise.
pub const THERMOMETER_MEAN_TOLERANCE: f64 = 0.5;

/// Standard deviation below which a thermometer is "ultra precise".
pub const THERMOMETER_ULTRA_STDDEV: f64 = 3.0;

/// Standard deviation below which a thermometer is "very precise".
///
/// Spread in `[THERMOMETER_ULTRA_STDDEV, THERMOMETER_VERY_STDDEV)` maps to
/// "very precise"; anything wider falls through to "precise".
pub const THERMOMETER_VERY_STDDEV: f64 = 5.0;
