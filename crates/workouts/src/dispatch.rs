//! Turns raw workout packages into typed workouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::WorkoutError;
use crate::training::{Readings, Running, SportsWalking, Swimming, Training};

/// The closed set of supported workout types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Three-letter code used in packages.
    pub fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Number of positional readings the workout type takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))
    }
}

/// A workout built from a package.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Swimming(_) => WorkoutKind::Swimming,
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking(_) => WorkoutKind::SportsWalking,
        }
    }

    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Swimming(w) => w,
            Self::Running(w) => w,
            Self::SportsWalking(w) => w,
        }
    }
}

impl Training for Workout {
    fn training_type(&self) -> &'static str {
        self.as_training().training_type()
    }

    fn readings(&self) -> &Readings {
        self.as_training().readings()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn get_distance(&self) -> f64 {
        self.as_training().get_distance()
    }

    fn get_mean_speed(&self) -> f64 {
        self.as_training().get_mean_speed()
    }

    fn get_spent_calories(&self) -> f64 {
        self.as_training().get_spent_calories()
    }
}

/// Raw input: a workout code and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub code: String,
    pub readings: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            readings,
        }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.readings)
    }
}

/// Builds the workout named by `code` from positional `readings`.
///
/// Readings per code:
/// - `SWM`: action, duration (h), weight (kg), pool length (m), pool laps
/// - `RUN`: action, duration (h), weight (kg)
/// - `WLK`: action, duration (h), weight (kg), height (cm)
pub fn read_package(code: &str, readings: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = code.parse::<WorkoutKind>().inspect_err(|e| warn!("Rejected package: {e}"))?;

    if readings.len() != kind.arity() {
        let err = WorkoutError::ReadingCount {
            kind,
            expected: kind.arity(),
            actual: readings.len(),
        };
        warn!("Rejected package: {err}");
        return Err(err);
    }

    let action = count(readings, 0)?;
    let (duration_h, weight_kg) = (readings[1], readings[2]);

    let workout = match kind {
        WorkoutKind::Swimming => Workout::Swimming(Swimming::new(
            action,
            duration_h,
            weight_kg,
            readings[3],
            count(readings, 4)?,
        )),
        WorkoutKind::Running => Workout::Running(Running::new(action, duration_h, weight_kg)),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::new(
            action,
            duration_h,
            weight_kg,
            readings[3],
        )),
    };

    debug!(%kind, ?readings, "Built workout");
    Ok(workout)
}

/// Reads a step, stroke or lap count at `index`.
fn count(readings: &[f64], index: usize) -> Result<u32, WorkoutError> {
    let value = readings[index];
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        let err = WorkoutError::InvalidReading { index, value };
        warn!("Rejected package: {err}");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("SWM".parse::<WorkoutKind>().unwrap(), WorkoutKind::Swimming);
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!(
            "WLK".parse::<WorkoutKind>().unwrap(),
            WorkoutKind::SportsWalking
        );
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        match err {
            WorkoutError::UnknownWorkoutType(code) => assert_eq!(code, "XYZ"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(WorkoutError::UnknownWorkoutType(_))
        ));
    }

    #[test]
    fn test_unknown_code_reported_before_arity() {
        assert!(matches!(
            read_package("XYZ", &[]),
            Err(WorkoutError::UnknownWorkoutType(_))
        ));
    }

    #[test]
    fn test_wrong_reading_count() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::ReadingCount {
                kind: WorkoutKind::SportsWalking,
                expected: 4,
                actual: 3,
            }
        ));
        assert_eq!(err.to_string(), "WLK expects 4 readings, got 3");
    }

    #[test]
    fn test_fractional_count_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidReading { index: 4, .. }));

        let err = read_package("RUN", &[-1.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidReading { index: 0, .. }));
    }

    #[test]
    fn test_builds_matching_variant() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
        );
        assert_eq!(workout.kind(), WorkoutKind::Swimming);

        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            workout,
            Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
        );
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40);

        assert_eq!(workout.training_type(), "Swimming");
        assert_eq!(workout.show_training_info(), swimming.show_training_info());
    }

    #[test]
    fn test_package_read() {
        let package = WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        assert_eq!(
            package.read().unwrap(),
            Workout::Running(Running::new(15000, 1.0, 75.0))
        );
    }
}
