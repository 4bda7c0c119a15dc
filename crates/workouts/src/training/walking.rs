//! Sports walking.

use super::{Readings, Training};
use crate::config::{CM_IN_M, KMH_IN_MSEC};

/// Sports walking workout. Adds the walker's height to the common readings.
///
/// Mean speed stays in km/h; the calorie formula converts it to m/s and the
/// height to meters:
/// `(0.035 * weight + speed_mps^2 / height_m * 0.029 * weight) * duration_min`.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    readings: Readings,
    /// Height in centimeters.
    height_cm: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            readings: Readings::new(action, duration_h, weight_kg),
            height_cm,
        }
    }

    /// Height in centimeters.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn get_spent_calories(&self) -> f64 {
        let weight = self.readings.weight_kg;
        let speed_mps = self.get_mean_speed() * KMH_IN_MSEC;
        let height_m = self.height_cm / CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_mps.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.readings.duration_min()
    }
}
