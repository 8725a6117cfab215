//! Pipeline orchestration
//!
//! This module provides the public API of the tracker. It runs each package
//! through the full pipeline: registry lookup → workout construction →
//! summary → rendered report line.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ComputeError;
use crate::formatter::{Language, SummaryFormatter};
use crate::registry::WorkoutRegistry;
use crate::schema::WorkoutPackage;
use crate::types::{SensorReading, Summary};

/// Summarize one workout using the built-in registry.
///
/// # Arguments
/// * `workout_type` - Three-letter workout code (e.g. "RUN")
/// * `data` - Positional sensor values for that workout
///
/// # Returns
/// `None` when the code is not a known workout type
///
/// # Example
/// ```
/// let summary = fitness_tracker::summarize("RUN", &[15000.0, 1.0, 75.0])?.unwrap();
/// assert_eq!(summary.distance_km, 9.75);
/// # Ok::<(), fitness_tracker::ComputeError>(())
/// ```
pub fn summarize(workout_type: &str, data: &[f64]) -> Result<Option<Summary>, ComputeError> {
    WorkoutProcessor::new().summarize(&WorkoutPackage::new(workout_type, SensorReading::from(data)))
}

/// Processing options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Language of rendered report lines
    pub language: Language,
    /// Report contract violations per package instead of stopping at the first
    pub keep_going: bool,
}

/// How a package was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Ok,
    UnknownWorkout,
    Error,
}

/// Result of processing one package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageOutcome {
    pub workout_type: String,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    /// Rendered report line, fixed error line or error description
    pub message: String,
}

/// Processor holding the registry and formatter used for every package.
pub struct WorkoutProcessor {
    registry: WorkoutRegistry,
    formatter: SummaryFormatter,
    config: ProcessorConfig,
}

impl Default for WorkoutProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutProcessor {
    /// Create a processor with the built-in workouts and default settings
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        Self::with_registry(WorkoutRegistry::default(), config)
    }

    pub fn with_registry(registry: WorkoutRegistry, config: ProcessorConfig) -> Self {
        Self {
            registry,
            formatter: SummaryFormatter::new(config.language),
            config,
        }
    }

    pub fn registry(&self) -> &WorkoutRegistry {
        &self.registry
    }

    /// Mutable access for registering additional workouts
    pub fn registry_mut(&mut self) -> &mut WorkoutRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Compute the summary of one package, `None` for an unknown workout code
    pub fn summarize(&self, package: &WorkoutPackage) -> Result<Option<Summary>, ComputeError> {
        let Some(workout) = self.registry.resolve(&package.workout_type, &package.data)? else {
            return Ok(None);
        };

        let summary = workout.build_summary()?;
        debug!(
            workout = %summary.training_type,
            distance_km = summary.distance_km,
            calories_kcal = summary.calories_kcal,
            "computed summary"
        );
        Ok(Some(summary))
    }

    /// Render the report line of one package
    pub fn process(&self, package: &WorkoutPackage) -> Result<String, ComputeError> {
        let summary = self.summarize(package)?;
        Ok(self.formatter.format_outcome(summary.as_ref()))
    }

    /// Process packages in order.
    ///
    /// Contract violations stop processing unless `keep_going` is set, in
    /// which case they are reported as [`OutcomeStatus::Error`].
    pub fn process_all(
        &self,
        packages: &[WorkoutPackage],
    ) -> Result<Vec<PackageOutcome>, ComputeError> {
        let mut outcomes = Vec::with_capacity(packages.len());

        for package in packages {
            let outcome = match self.summarize(package) {
                Ok(Some(summary)) => PackageOutcome {
                    workout_type: package.workout_type.clone(),
                    status: OutcomeStatus::Ok,
                    message: self.formatter.format(&summary),
                    summary: Some(summary),
                },
                Ok(None) => PackageOutcome {
                    workout_type: package.workout_type.clone(),
                    status: OutcomeStatus::UnknownWorkout,
                    summary: None,
                    message: self.formatter.format_outcome(None),
                },
                Err(e) if self.config.keep_going => {
                    warn!(workout_type = %package.workout_type, error = %e, "skipping package");
                    PackageOutcome {
                        workout_type: package.workout_type.clone(),
                        status: OutcomeStatus::Error,
                        summary: None,
                        message: e.to_string(),
                    }
                }
                Err(e) => return Err(e),
            };
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Process packages into report lines
    pub fn render_lines(&self, packages: &[WorkoutPackage]) -> Result<Vec<String>, ComputeError> {
        Ok(self
            .process_all(packages)?
            .into_iter()
            .map(|outcome| outcome.message)
            .collect())
    }
}
