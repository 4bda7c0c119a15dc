//! Rendered summary of a finished workout.

use std::fmt;

use serde::Serialize;

/// Summary of one workout, produced by [`Training::show_training_info`].
///
/// [`Training::show_training_info`]: crate::training::Training::show_training_info
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    /// Name of the concrete workout type, e.g. `Running`.
    pub training_type: String,
    /// Duration in hours.
    pub duration: f64,
    /// Distance in kilometers.
    pub distance: f64,
    /// Mean speed in km/h.
    pub speed: f64,
    /// Spent calories in kcal.
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Renders the summary line, every number with three decimals.
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Same as [`InfoMessage::get_message`].
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories spent: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
