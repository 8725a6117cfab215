//! Sports walking workout

use super::{arity_mismatch, floor_div, Training, TrainingBase, MINUTES_IN_HOUR};
use crate::error::ComputeError;
use crate::types::{SensorReading, WorkoutKind};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_POWER: i32 = 2;
const CALORIES_WEIGHT_COEFF: f64 = 0.029;

/// Sports walking: running's distance model plus the walker's height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Athlete height (cm)
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration_hours, weight_kg),
            height_cm,
        }
    }

    /// Build from `(action, duration_hours, weight_kg, height_cm)`
    pub fn from_reading(reading: &SensorReading) -> Result<Self, ComputeError> {
        match *reading.values() {
            [action, duration_hours, weight_kg, height_cm] => {
                Ok(Self::new(action, duration_hours, weight_kg, height_cm))
            }
            _ => Err(arity_mismatch(WorkoutKind::SportsWalking, reading)),
        }
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        WorkoutKind::SportsWalking.name()
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn validate(&self) -> Result<(), ComputeError> {
        if self.height_cm == 0.0 {
            return Err(ComputeError::ZeroHeight(self.name().to_string()));
        }
        Ok(())
    }

    fn spent_calories(&self) -> f64 {
        // speed^2 / height is floored, not a true division
        let speed_term = floor_div(
            self.mean_speed_kmh().powi(CALORIES_SPEED_POWER),
            self.height_cm,
        );
        (CALORIES_WEIGHT_MULTIPLIER * self.base.weight_kg
            + speed_term * CALORIES_WEIGHT_COEFF * self.base.weight_kg)
            * self.base.duration_hours
            * MINUTES_IN_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_sample_package() {
        let walking = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);

        assert!((walking.distance_km() - 5.85).abs() < 1e-12);
        assert!((walking.mean_speed_kmh() - 5.85).abs() < 1e-12);
        assert!((walking.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn test_walking_speed_term_is_floored() {
        // speed 20 km/h: 400 / 180 floors to 2 rather than 2.22
        let walking = SportsWalking::new(20000.0 / 0.65, 1.0, 70.0, 180.0);
        let speed = walking.mean_speed_kmh();
        let floored = (speed * speed / 180.0).floor();
        assert_eq!(floored, 2.0);

        let expected = (0.035 * 70.0 + floored * 0.029 * 70.0) * 60.0;
        assert!((walking.spent_calories() - expected).abs() < 1e-9);

        let unfloored = (0.035 * 70.0 + speed * speed / 180.0 * 0.029 * 70.0) * 60.0;
        assert!((walking.spent_calories() - unfloored).abs() > 1.0);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let walking = SportsWalking::new(9000.0, 1.0, 75.0, 0.0);
        let err = walking.build_summary().unwrap_err();

        assert!(matches!(err, ComputeError::ZeroHeight(ref name) if name == "SportsWalking"));
        assert_eq!(err.to_string(), "Zero height for SportsWalking: calories are undefined");
    }

    #[test]
    fn test_walking_from_reading_checks_arity() {
        let ok = SportsWalking::from_reading(&SensorReading::new(vec![9000.0, 1.0, 75.0, 180.0]))
            .unwrap();
        assert_eq!(ok.height_cm, 180.0);

        let err = SportsWalking::from_reading(&SensorReading::new(vec![9000.0, 1.0, 75.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            ComputeError::ArityMismatch { expected: 4, actual: 3, .. }
        ));
    }
}
