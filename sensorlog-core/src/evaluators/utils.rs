//! Shared statistics
//!
//! Pure functions over reading values. Empty input yields 0 rather than NaN;
//! the engine never evaluates a sensor without readings.

/// Arithmetic mean
pub fn compute_mean(readings: &[f64]) -> f64 {
    if readings.is_empty() {
        return 0.0;
    }
    readings.iter().sum::<f64>() / readings.len() as f64
}

/// Population standard deviation (divides by N, not N - 1)
pub fn compute_standard_deviation(readings: &[f64]) -> f64 {
    if readings.is_empty() {
        return 0.0;
    }
    let mean = compute_mean(readings);
    let variance = readings
        .iter()
        .map(|reading| (reading - mean).powi(2))
        .sum::<f64>()
        / readings.len() as f64;
    variance.sqrt()
}
