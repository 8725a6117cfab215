//! Workout calculations
//!
//! Each workout modality implements the [`Training`] capability trait. The
//! trait carries the shared distance and speed formulas; calories have no
//! shared formula, so every modality must provide its own.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;
use crate::types::{SensorReading, Summary, WorkoutKind};

/// Default length of one step (m)
pub const LEN_STEP_M: f64 = 0.65;
/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Measurements shared by every workout modality
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingBase {
    /// Steps taken or strokes made
    pub action: f64,
    /// Workout duration (hours)
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
}

impl TrainingBase {
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }
}

/// Trait for workout calculations
pub trait Training: Send + Sync + std::fmt::Debug {
    /// Display name reported in summaries
    fn name(&self) -> &'static str;

    /// Shared measurements
    fn base(&self) -> &TrainingBase;

    /// Distance covered by one action (m)
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance covered (km)
    fn distance_km(&self) -> f64 {
        self.base().action * self.step_length_m() / M_IN_KM
    }

    /// Average speed (km/h)
    ///
    /// Not finite when the duration is zero; [`Training::build_summary`]
    /// rejects that case before any formula runs.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours
    }

    /// Energy spent (kcal)
    fn spent_calories(&self) -> f64;

    /// Reject measurements that leave one of this workout's formulas undefined
    fn validate(&self) -> Result<(), ComputeError> {
        Ok(())
    }

    /// Evaluate distance, speed and calories, in that order, into a summary
    fn build_summary(&self) -> Result<Summary, ComputeError> {
        let base = self.base();
        if base.duration_hours == 0.0 {
            return Err(ComputeError::ZeroDuration(self.name().to_string()));
        }
        self.validate()?;

        let distance_km = self.distance_km();
        let mean_speed_kmh = self.mean_speed_kmh();
        let calories_kcal = self.spent_calories();

        Ok(Summary {
            training_type: self.name().to_string(),
            duration_hours: base.duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        })
    }
}

/// Error for a reading whose field count does not match the workout
fn arity_mismatch(kind: WorkoutKind, reading: &SensorReading) -> ComputeError {
    ComputeError::ArityMismatch {
        workout_type: kind.name().to_string(),
        expected: kind.arity(),
        actual: reading.len(),
    }
}

/// Floored division of two floats.
///
/// Computed from the remainder rather than as `(a / b).floor()`, so a
/// quotient that rounds up onto an integer is not floored past it.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
