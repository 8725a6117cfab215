//! Swimming workout

use super::{arity_mismatch, Training, TrainingBase, M_IN_KM};
use crate::error::ComputeError;
use crate::types::{SensorReading, WorkoutKind};

/// Distance covered by one stroke (m)
const LEN_STROKE_M: f64 = 1.38;
const CALORIES_SPEED_ADD: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming: speed comes from pool laps, distance from stroke count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Pool length (m)
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_lap_count: f64,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: f64,
    ) -> Self {
        Self {
            base: TrainingBase::new(action, duration_hours, weight_kg),
            pool_length_m,
            pool_lap_count,
        }
    }

    /// Build from `(action, duration_hours, weight_kg, pool_length_m, pool_lap_count)`
    pub fn from_reading(reading: &SensorReading) -> Result<Self, ComputeError> {
        match *reading.values() {
            [action, duration_hours, weight_kg, pool_length_m, pool_lap_count] => Ok(Self::new(
                action,
                duration_hours,
                weight_kg,
                pool_length_m,
                pool_lap_count,
            )),
            _ => Err(arity_mismatch(WorkoutKind::Swimming, reading)),
        }
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        WorkoutKind::Swimming.name()
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count / M_IN_KM / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_ADD)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg
    }
}
