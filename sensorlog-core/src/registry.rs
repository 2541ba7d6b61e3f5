//! Sensor registry
//!
//! One immutable [`SensorDefinition`] per [`SensorKind`]: which evaluator runs
//! and which reference field it is compared against. Adding a kind means
//! adding an enum variant and a table row; the compiler flags every match that
//! needs updating.

use crate::errors::LogResult;
use crate::evaluators::{evaluate_humidity_with_policy, evaluate_monoxide_with_policy, evaluate_thermometer_with_policy};
use crate::model::{Classification, Reference, SensorKind};
use crate::policy::EvaluationPolicy;

/// Evaluator over reading values, the reference value and the active policy
pub type Evaluator = fn(&[f64], f64, &EvaluationPolicy) -> Classification;

/// Selects one field of a [`Reference`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKey {
    /// `Reference::temperature`
    Temperature,
    /// `Reference::humidity`
    Humidity,
    /// `Reference::monoxide`
    Monoxide,
}

impl ReferenceKey {
    /// Read the selected field
    pub const fn value_in(&self, reference: &Reference) -> f64 {
        match self {
            ReferenceKey::Temperature => reference.temperature,
            ReferenceKey::Humidity => reference.humidity,
            ReferenceKey::Monoxide => reference.monoxide,
        }
    }

    /// Field name as written in JSON logs
    pub const fn field(&self) -> &'static str {
        match self {
            ReferenceKey::Temperature => "temperature",
            ReferenceKey::Humidity => "humidity",
            ReferenceKey::Monoxide => "monoxide",
        }
    }
}

/// How one sensor kind is evaluated
#[derive(Debug, Clone, Copy)]
pub struct SensorDefinition {
    /// Classifies the sensor's reading values
    pub evaluator: Evaluator,
    /// Reference field the readings are compared against
    pub reference_key: ReferenceKey,
}

impl SensorDefinition {
    /// Run the evaluator against the matching reference field
    pub fn evaluate(&self, readings: &[f64], reference: &Reference, policy: &EvaluationPolicy) -> Classification {
        (self.evaluator)(readings, self.reference_key.value_in(reference), policy)
    }
}

/// Indexed in [`SensorKind::ALL`] order
pub static SENSORS: [SensorDefinition; 3] = [
    SensorDefinition { evaluator: evaluate_thermometer_with_policy, reference_key: ReferenceKey::Temperature },
    SensorDefinition { evaluator: evaluate_humidity_with_policy, reference_key: ReferenceKey::Humidity },
    SensorDefinition { evaluator: evaluate_monoxide_with_policy, reference_key: ReferenceKey::Monoxide },
];

/// Definition for a sensor kind
pub fn definition(kind: SensorKind) -> &'static SensorDefinition {
    match kind {
        SensorKind::Thermometer => &SENSORS[0],
        SensorKind::Humidity => &SENSORS[1],
        SensorKind::Monoxide => &SENSORS[2],
    }
}

/// Resolve a sensor type string against the registry
///
/// Unknown types fail with `UnrecognizedSensor`. The reference lookup itself
/// cannot fail: every [`Reference`] carries all three fields, and zero or NaN
/// values are accepted as they are.
pub fn validate_sensor_type_and_reference(sensor_type: &str, reference: &Reference) -> LogResult<SensorKind> {
    let kind: SensorKind = sensor_type.parse()?;
    let _value = definition(kind).reference_key.value_in(reference);
    log_debug!("sensor type '{}' resolved, reference {} = {}", kind, definition(kind).reference_key.field(), _value);
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LogError;

    const REFERENCE: Reference = Reference { temperature: 70.0, humidity: 45.0, monoxide: 6.0 };

    #[test]
    fn table_matches_kinds() {
        assert_eq!(definition(SensorKind::Thermometer).reference_key, ReferenceKey::Temperature);
        assert_eq!(definition(SensorKind::Humidity).reference_key, ReferenceKey::Humidity);
        assert_eq!(definition(SensorKind::Monoxide).reference_key, ReferenceKey::Monoxide);
        assert_eq!(ReferenceKey::Monoxide.value_in(&REFERENCE), 6.0);
    }

    #[test]
    fn known_types_resolve() {
        assert_eq!(validate_sensor_type_and_reference("humidity", &REFERENCE), Ok(SensorKind::Humidity));
        let zero = Reference { temperature: 0.0, humidity: f64::NAN, monoxide: 0.0 };
        assert_eq!(validate_sensor_type_and_reference("thermometer", &zero), Ok(SensorKind::Thermometer));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            validate_sensor_type_and_reference("barometer", &REFERENCE),
            Err(LogError::UnrecognizedSensor("barometer".into()))
        );
        assert!(validate_sensor_type_and_reference("Thermometer", &REFERENCE).is_err());
    }

    #[test]
    fn definitions_use_their_reference_field() {
        let policy = EvaluationPolicy::default();
        assert_eq!(definition(SensorKind::Humidity).evaluate(&[45.5], &REFERENCE, &policy), Classification::Keep);
        assert_eq!(definition(SensorKind::Monoxide).evaluate(&[45.5], &REFERENCE, &policy), Classification::Discard);
        assert_eq!(
            definition(SensorKind::Thermometer).evaluate(&[70.1, 69.9], &REFERENCE, &policy),
            Classification::UltraPrecise
        );
    }
}
