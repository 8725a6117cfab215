//! Workout registry
//!
//! Maps three-letter workout codes to the constructor of the matching
//! [`Training`] implementation. An unknown code is an expected outcome and
//! resolves to `None`; a reading with the wrong number of fields is a caller
//! error and resolves to [`ComputeError::ArityMismatch`].

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::ComputeError;
use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::types::{SensorReading, WorkoutKind};

/// Builds a workout from a positional sensor reading
pub type Constructor = fn(&SensorReading) -> Result<Box<dyn Training>, ComputeError>;

/// A registered workout type
#[derive(Clone, Copy)]
pub struct RegisteredWorkout {
    /// Display name of the workout
    pub name: &'static str,
    /// Positional field names of its reading
    pub fields: &'static [&'static str],
    pub constructor: Constructor,
}

impl RegisteredWorkout {
    /// Registry entry for a built-in workout kind
    pub fn builtin(kind: WorkoutKind) -> Self {
        let constructor: Constructor = match kind {
            WorkoutKind::Running => build_running,
            WorkoutKind::SportsWalking => build_walking,
            WorkoutKind::Swimming => build_swimming,
        };
        Self {
            name: kind.name(),
            fields: kind.fields(),
            constructor,
        }
    }
}

impl fmt::Debug for RegisteredWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredWorkout")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

fn build_running(reading: &SensorReading) -> Result<Box<dyn Training>, ComputeError> {
    Ok(Box::new(Running::from_reading(reading)?))
}

fn build_walking(reading: &SensorReading) -> Result<Box<dyn Training>, ComputeError> {
    Ok(Box::new(SportsWalking::from_reading(reading)?))
}

fn build_swimming(reading: &SensorReading) -> Result<Box<dyn Training>, ComputeError> {
    Ok(Box::new(Swimming::from_reading(reading)?))
}

/// Dispatch table from workout code to constructor
#[derive(Debug, Clone)]
pub struct WorkoutRegistry {
    entries: HashMap<String, RegisteredWorkout>,
}

impl Default for WorkoutRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for kind in WorkoutKind::ALL {
            registry.register(kind.code(), RegisteredWorkout::builtin(kind));
        }
        registry
    }
}

impl WorkoutRegistry {
    /// Registry with the built-in SWM, RUN and WLK workouts
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no workouts
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a workout under `code`, replacing any previous entry
    pub fn register(&mut self, code: impl Into<String>, workout: RegisteredWorkout) {
        self.entries.insert(code.into(), workout);
    }

    /// Look up the entry registered under `code`
    pub fn get(&self, code: &str) -> Option<&RegisteredWorkout> {
        self.entries.get(code)
    }

    /// Registered codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Resolve a workout code and build the workout from its reading.
    ///
    /// Returns `Ok(None)` when no workout is registered under `code`.
    pub fn resolve(
        &self,
        code: &str,
        reading: &SensorReading,
    ) -> Result<Option<Box<dyn Training>>, ComputeError> {
        let Some(entry) = self.entries.get(code) else {
            debug!(code, "no such workout type");
            return Ok(None);
        };

        let workout = (entry.constructor)(reading)?;
        debug!(code, workout = entry.name, fields = reading.len(), "resolved workout");
        Ok(Some(workout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::TrainingBase;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use tracing::{span, Event, Level, Metadata, Subscriber};

    #[test]
    fn test_builtin_codes() {
        let registry = WorkoutRegistry::new();
        assert_eq!(registry.codes(), vec!["RUN", "SWM", "WLK"]);
    }

    #[test]
    fn test_resolve_builtin_kinds() {
        let registry = WorkoutRegistry::new();

        let cases = [
            ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], WorkoutKind::Swimming),
            ("RUN", vec![15000.0, 1.0, 75.0], WorkoutKind::Running),
            ("WLK", vec![9000.0, 1.0, 75.0, 180.0], WorkoutKind::SportsWalking),
        ];

        for (code, values, kind) in cases {
            let workout = registry
                .resolve(code, &SensorReading::new(values))
                .unwrap()
                .unwrap();
            assert_eq!(workout.name(), kind.name());
        }
    }

    #[test]
    fn test_unknown_code_is_absent() {
        let registry = WorkoutRegistry::new();
        let resolved = registry
            .resolve("SMTH", &SensorReading::new(vec![9.0, 1.0, 90.0, 180.0]))
            .unwrap();
        assert!(resolved.is_none());
    }

    /// Records the level of every event emitted while installed
    struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

    impl Subscriber for LevelRecorder {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    #[test]
    fn test_unknown_code_logs_below_warn() {
        let levels = Arc::new(Mutex::new(Vec::new()));
        let registry = WorkoutRegistry::new();

        tracing::subscriber::with_default(LevelRecorder(Arc::clone(&levels)), || {
            let resolved = registry
                .resolve("SMTH", &SensorReading::new(vec![9.0, 1.0, 90.0, 180.0]))
                .unwrap();
            assert!(resolved.is_none());
        });

        let levels = levels.lock().unwrap();
        assert!(!levels.is_empty());
        assert!(levels.iter().all(|level| *level == Level::DEBUG));
    }

    #[test]
    fn test_arity_mismatch_is_an_error() {
        let registry = WorkoutRegistry::new();
        let err = registry
            .resolve("SWM", &SensorReading::new(vec![720.0, 1.0, 80.0]))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Swimming expects 5 sensor fields, got 3"
        );
    }

    #[derive(Debug)]
    struct Cycling {
        base: TrainingBase,
    }

    impl Training for Cycling {
        fn name(&self) -> &'static str {
            "Cycling"
        }

        fn base(&self) -> &TrainingBase {
            &self.base
        }

        fn step_length_m(&self) -> f64 {
            4.0
        }

        fn spent_calories(&self) -> f64 {
            self.base.weight_kg * self.base.duration_hours * 8.0
        }
    }

    fn build_cycling(reading: &SensorReading) -> Result<Box<dyn Training>, ComputeError> {
        match *reading.values() {
            [action, duration_hours, weight_kg] => Ok(Box::new(Cycling {
                base: TrainingBase::new(action, duration_hours, weight_kg),
            })),
            _ => Err(ComputeError::ArityMismatch {
                workout_type: "Cycling".to_string(),
                expected: 3,
                actual: reading.len(),
            }),
        }
    }

    #[test]
    fn test_register_custom_workout() {
        let mut registry = WorkoutRegistry::new();
        registry.register(
            "CYC",
            RegisteredWorkout {
                name: "Cycling",
                fields: &["action", "duration_hours", "weight_kg"],
                constructor: build_cycling,
            },
        );

        let workout = registry
            .resolve("CYC", &SensorReading::new(vec![5000.0, 1.0, 70.0]))
            .unwrap()
            .unwrap();
        assert_eq!(workout.distance_km(), 20.0);
        assert_eq!(workout.spent_calories(), 560.0);
        assert_eq!(workout.build_summary().unwrap().training_type, "Cycling");
        assert_eq!(registry.get("CYC").map(|e| e.name), Some("Cycling"));
    }
}
