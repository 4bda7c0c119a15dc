//! Swimming.

use super::{Readings, Training};
use crate::config::M_IN_KM;

/// Swimming workout.
///
/// Actions are strokes, so distance uses the 1.38 m stroke length. Mean speed
/// comes from pool laps instead and ignores the stroke count.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    readings: Readings,
    /// Pool length in meters.
    length_pool_m: f64,
    /// Laps swum.
    count_pool: u32,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            readings: Readings::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }

    /// Pool length in meters.
    pub fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    /// Laps swum.
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn get_mean_speed(&self) -> f64 {
        self.length_pool_m * f64::from(self.count_pool) / M_IN_KM / self.readings.duration_h
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.readings.weight_kg
            * self.readings.duration_h
    }
}
