//! Workout types and the calculations they share.
//!
//! Each discipline implements [`Training`]. Distance and mean speed have
//! default implementations based on step length; spent calories must be
//! supplied by every discipline.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::config::{DEFAULT_LEN_STEP, M_IN_KM, MIN_IN_H};
use crate::info_message::InfoMessage;

/// Sensor readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Steps or strokes performed.
    pub action: u32,
    /// Duration in hours.
    pub duration_h: f64,
    /// Body weight in kilograms.
    pub weight_kg: f64,
}

impl Readings {
    pub const fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_H
    }
}

/// Trait implemented by every workout discipline.
pub trait Training {
    /// Name reported in the summary, e.g. `Running`.
    fn training_type(&self) -> &'static str;

    fn readings(&self) -> &Readings;

    /// Distance covered by one action, in meters.
    fn len_step(&self) -> f64 {
        DEFAULT_LEN_STEP
    }

    /// Distance in kilometers.
    fn get_distance(&self) -> f64 {
        f64::from(self.readings().action) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.readings().duration_h
    }

    /// Spent calories in kcal.
    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.readings().duration_h,
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        )
    }
}

#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_in_minutes() {
        let readings = Readings::new(0, 1.5, 70.0);
        assert!((readings.duration_min() - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_summary_is_repeatable() {
        let running = Running::new(10000, 1.5, 70.0);
        assert_eq!(running.show_training_info(), running.show_training_info());
    }

    #[test]
    fn test_summary_through_trait_object() {
        let workouts: Vec<Box<dyn Training>> = vec![
            Box::new(Running::new(15000, 1.0, 75.0)),
            Box::new(SportsWalking::new(9000, 1.0, 75.0, 180.0)),
            Box::new(Swimming::new(720, 1.0, 80.0, 25.0, 40)),
        ];

        let names: Vec<_> = workouts
            .iter()
            .map(|w| w.show_training_info().training_type)
            .collect();
        assert_eq!(names, ["Running", "SportsWalking", "Swimming"]);
    }
}
