//! Workout package input schema
//!
//! A package pairs a workout code with the positional sensor values read for
//! it. Packages arrive either as a JSON array or as NDJSON (one per line):
//!
//! ```json
//! {"workout_type": "RUN", "data": [15000, 1, 75]}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;
use crate::types::SensorReading;

/// One workout's raw sensor package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Three-letter workout code (e.g. "RUN")
    pub workout_type: String,
    /// Positional sensor values, in the order the workout declares
    pub data: SensorReading,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<SensorReading>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}

/// Parser for workout packages
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON string containing an array of packages
    pub fn parse_array(json: &str) -> Result<Vec<WorkoutPackage>, ComputeError> {
        let packages: Vec<WorkoutPackage> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (newline-delimited JSON) containing packages
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<WorkoutPackage>, ComputeError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<WorkoutPackage>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(ComputeError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }
}

/// The reference sensor packages: one per built-in workout plus an unknown code
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        WorkoutPackage::new("SMTH", vec![9.0, 1.0, 90.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "WLK", "data": [9000, 1, 75, 180]}
        ]"#;
        let packages = PackageReader::parse_array(json).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(packages[1].data.len(), 4);
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let ndjson = "{\"workout_type\": \"SWM\", \"data\": [720, 1, 80, 25, 40]}\n\n\
                      {\"workout_type\": \"SMTH\", \"data\": [9, 1, 90, 180]}\n";
        let packages = PackageReader::parse_ndjson(ndjson).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].workout_type, "SMTH");
    }

    #[test]
    fn test_parse_ndjson_reports_line_number() {
        let ndjson = "{\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}\n\
                      {\"workout_type\": \"RUN\", \"data\": \"oops\"}\n";
        let err = PackageReader::parse_ndjson(ndjson).unwrap_err();

        assert!(matches!(err, ComputeError::ParseError(ref msg) if msg.starts_with("Failed to parse line 2")));
    }

    #[test]
    fn test_parse_array_rejects_invalid_json() {
        let err = PackageReader::parse_array("not json").unwrap_err();
        assert!(matches!(err, ComputeError::JsonError(_)));
    }

    #[test]
    fn test_sample_packages() {
        let codes: Vec<String> = sample_packages().into_iter().map(|p| p.workout_type).collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK", "SMTH"]);
    }
}
