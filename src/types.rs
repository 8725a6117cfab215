//! Core types for the fitness tracker
//!
//! This module defines the data that flows through each stage: the raw sensor
//! reading, the workout kind resolved from its code, and the computed summary.

use serde::{Deserialize, Serialize};

/// Workout modality known to the built-in registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Every built-in kind, in registration order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter code used by sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Display name reported in summaries
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional field names of the sensor reading for this kind
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration_hours", "weight_kg"],
            WorkoutKind::SportsWalking => &["action", "duration_hours", "weight_kg", "height_cm"],
            WorkoutKind::Swimming => &[
                "action",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
        }
    }

    /// Number of sensor fields expected for this kind
    pub fn arity(&self) -> usize {
        self.fields().len()
    }
}

/// Raw positional sensor values for one workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorReading {
    values: Vec<f64>,
}

impl SensorReading {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for SensorReading {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for SensorReading {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Computed results of a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Display name of the workout variant
    pub training_type: String,
    /// Workout duration (hours)
    pub duration_hours: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Average speed (km/h)
    pub mean_speed_kmh: f64,
    /// Energy spent (kcal)
    pub calories_kcal: f64,
}
