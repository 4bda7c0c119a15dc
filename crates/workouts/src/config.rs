//! Compile-time constants shared by every workout type.
//!
//! Formula coefficients that belong to a single discipline live next to it as
//! associated constants (see [`crate::training`]); only unit conversions and
//! the demo packages are kept here.

use crate::dispatch::WorkoutPackage;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Centimeters in a meter.
pub const CM_IN_M: f64 = 100.0;

/// Multiplier taking km/h to m/s (rounded to three places).
pub const KMH_IN_MSEC: f64 = 0.278;

/// Step length in meters for walking and running.
pub const DEFAULT_LEN_STEP: f64 = 0.65;

/// The three canonical packages, one per workout type.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
