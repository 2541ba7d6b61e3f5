//! Sensor evaluators
//!
//! Each evaluator maps a sensor's reading values and its reference value to a
//! [`Classification`](crate::model::Classification):
//!
//! - thermometers: precision bands over mean offset and spread
//! - humidity and monoxide: a fixed deviation threshold
//!
//! The `*_with_policy` functions share one signature so the
//! [registry](crate::registry) can store them as plain function pointers.

pub mod thermometer;
pub mod threshold;
pub mod utils;

pub use thermometer::{evaluate_thermometer, evaluate_thermometer_with_bands, evaluate_thermometer_with_policy};
pub use threshold::{
    evaluate_humidity_with_policy, evaluate_monoxide_with_policy, evaluate_readings_against_threshold,
};
pub use utils::{compute_mean, compute_standard_deviation};
