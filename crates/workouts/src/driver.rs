//! Runs packages through the dispatcher and writes their summaries.

use std::io::Write;

use tracing::info;

use crate::dispatch::WorkoutPackage;
use crate::errors::WorkoutError;
use crate::training::Training;

/// Writes the summary line of one workout.
pub fn run_training(training: &dyn Training, out: &mut impl Write) -> Result<(), WorkoutError> {
    let info = training.show_training_info();
    writeln!(out, "{}", info.get_message())?;
    Ok(())
}

/// Processes `packages` in order, one summary line each.
///
/// Stops at the first package that cannot be built; nothing is written for it.
/// Returns the number of summaries written.
pub fn run_batch<'a>(
    packages: impl IntoIterator<Item = &'a WorkoutPackage>,
    out: &mut impl Write,
) -> Result<usize, WorkoutError> {
    let mut written = 0;
    for package in packages {
        let workout = package.read()?;
        run_training(&workout, out)?;
        written += 1;
    }

    info!("Summarised {written} workouts");
    Ok(written)
}
