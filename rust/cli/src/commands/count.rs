//! Count command handler.
//!
//! Reports how many ordered sequences of card values (1-13) of a given length
//! sum to a target.

use pokersum_engine::partition::PartitionCounter;

use crate::error::CliError;
use std::io::Write;

/// Handle the count command.
///
/// # Errors
///
/// Returns `CliError::Engine` when the count does not fit in 64 bits.
pub fn handle_count_command(target: u32, slots: u32, out: &mut dyn Write) -> Result<(), CliError> {
    let mut counter = PartitionCounter::new();
    let n = counter.count(target, slots)?;
    writeln!(
        out,
        "Sequences of {} values summing to {}: {}",
        slots, target, n
    )?;
    Ok(())
}
