//! Fitness Tracker - Workout metrics engine
//!
//! The tracker turns raw sensor packages into workout reports through a
//! deterministic pipeline: code lookup → workout construction → distance,
//! speed and calorie formulas → rendered summary line.
//!
//! ## Workouts
//!
//! - **RUN** (`Running`): `[action, duration_hours, weight_kg]`
//! - **WLK** (`SportsWalking`): `[action, duration_hours, weight_kg, height_cm]`
//! - **SWM** (`Swimming`): `[action, duration_hours, weight_kg, pool_length_m, pool_lap_count]`

pub mod error;
pub mod formatter;
pub mod pipeline;
pub mod registry;
pub mod schema;
pub mod training;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::ComputeError;
pub use formatter::{Language, SummaryFormatter};
pub use pipeline::{summarize, PackageOutcome, ProcessorConfig, WorkoutProcessor};
pub use registry::{RegisteredWorkout, WorkoutRegistry};
pub use schema::{PackageReader, WorkoutPackage};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase};
pub use types::{SensorReading, Summary, WorkoutKind};

/// Tracker version reported by the CLI and FFI
pub const TRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");
