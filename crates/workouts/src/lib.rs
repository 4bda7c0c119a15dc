//! Workout summaries for running, sports walking and swimming.
//!
//! A workout package is a short type code plus positional sensor readings.
//! The dispatcher turns a package into a typed [`Workout`](dispatch::Workout),
//! and every workout reports its distance, mean speed and spent calories as an
//! [`InfoMessage`](info_message::InfoMessage).
//!
//! # Quick Start
//!
//! ```rust
//! use workouts::prelude::*;
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let info = workout.show_training_info();
//! assert_eq!(info.training_type, "Running");
//! println!("{}", info.get_message());
//! # Ok::<(), workouts::errors::WorkoutError>(())
//! ```

pub mod config;
pub mod dispatch;
pub mod driver;
pub mod errors;
pub mod info_message;
pub mod training;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::dispatch::{Workout, WorkoutKind, WorkoutPackage, read_package};
    pub use crate::driver::{run_batch, run_training};
    pub use crate::errors::WorkoutError;
    pub use crate::info_message::InfoMessage;
    pub use crate::training::{Readings, Running, SportsWalking, Swimming, Training};
}
