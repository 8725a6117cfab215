//! Running workout

use super::{arity_mismatch, Training, TrainingBase, MINUTES_IN_HOUR, M_IN_KM};
use crate::error::ComputeError;
use crate::types::{SensorReading, WorkoutKind};

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SUBTRACT: f64 = 20.0;

/// Running: distance from step count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration_hours, weight_kg),
        }
    }

    /// Build from `(action, duration_hours, weight_kg)`
    pub fn from_reading(reading: &SensorReading) -> Result<Self, ComputeError> {
        match *reading.values() {
            [action, duration_hours, weight_kg] => Ok(Self::new(action, duration_hours, weight_kg)),
            _ => Err(arity_mismatch(WorkoutKind::Running, reading)),
        }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        WorkoutKind::Running.name()
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_SPEED_SUBTRACT)
            * self.base.weight_kg
            / M_IN_KM
            * (self.base.duration_hours * MINUTES_IN_HOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sample_package() {
        let running = Running::new(15000.0, 1.0, 75.0);

        assert_eq!(running.distance_km(), 9.75);
        assert_eq!(running.mean_speed_kmh(), 9.75);
        assert!((running.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_running_calories_follow_formula() {
        for &(action, duration, weight) in &[(15000.0, 1.0, 75.0), (8000.0, 0.75, 62.5), (300.0, 2.0, 90.0)] {
            let running = Running::new(action, duration, weight);
            let speed = action * 0.65 / 1000.0 / duration;
            let expected = (18.0 * speed - 20.0) * weight / 1000.0 * (duration * 60.0);
            assert_eq!(running.spent_calories(), expected);
        }
    }

    #[test]
    fn test_slow_running_yields_negative_calories() {
        // Below 20/18 km/h the formula goes negative; inputs are not clamped
        let running = Running::new(1000.0, 1.0, 75.0);
        assert!(running.spent_calories() < 0.0);
    }

    #[test]
    fn test_running_from_reading_checks_arity() {
        let ok = Running::from_reading(&SensorReading::new(vec![15000.0, 1.0, 75.0])).unwrap();
        assert_eq!(ok, Running::new(15000.0, 1.0, 75.0));

        let err = Running::from_reading(&SensorReading::new(vec![15000.0, 1.0])).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::ArityMismatch { expected: 3, actual: 2, .. }
        ));
    }
}
