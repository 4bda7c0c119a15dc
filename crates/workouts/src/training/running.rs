//! Running.

use super::{Readings, Training};
use crate::config::M_IN_KM;

/// Running workout. Uses the default step length, distance and mean speed.
///
/// Calories: `(18 * speed + 1.79) * weight / 1000 * duration_min`.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    readings: Readings,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            readings: Readings::new(action, duration_h, weight_kg),
        }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.readings.weight_kg
            / M_IN_KM
            * self.readings.duration_min()
    }
}
