//! Enumerate command handler.
//!
//! Lists the ordered value sequences that sum to a target, either with a fixed
//! number of slots or of any length, printing at most `limit` of them.

use pokersum_engine::errors::EngineError;
use pokersum_engine::partition::{PartitionCounter, PartitionEnumerator, Partitions};

use crate::error::CliError;
use crate::formatters::format_partition;
use crate::ui;
use std::io::{self, Write};

/// Largest target accepted for any-length listing.
pub const MAX_ANY_LENGTH_TARGET: u32 = 20;

/// How many parts each listed sequence may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Slots(u32),
    Any,
}

/// Handle the enumerate command.
///
/// Writes at most `limit` sequences, one per line, followed by a `Total:`
/// line taken from the counter, so only the printed sequences are ever built.
/// When more sequences exist than are shown a warning goes to `err`.
pub fn handle_enumerate_command(
    target: u32,
    length: Length,
    limit: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if limit == 0 {
        return Err(CliError::InvalidInput("limit must be >0".into()));
    }
    let mut counter = PartitionCounter::new();
    let (parts, total) = match length {
        Length::Slots(k) => (
            PartitionEnumerator::iter_slots(target, k),
            counter.count(target, k),
        ),
        Length::Any if target > MAX_ANY_LENGTH_TARGET => {
            return Err(CliError::InvalidInput(format!(
                "any-length listing is limited to targets up to {}",
                MAX_ANY_LENGTH_TARGET
            )));
        }
        Length::Any => (
            PartitionEnumerator::iter(target),
            any_length_total(&mut counter, target),
        ),
    };
    let total = match total {
        Ok(n) => Some(n),
        Err(EngineError::CountOverflow { .. }) => None,
        Err(e) => return Err(e.into()),
    };
    let shown = write_parts(parts, limit, out)?;
    match total {
        Some(n) => writeln!(out, "Total: {}", n)?,
        None => writeln!(out, "Total: more than {}", u64::MAX)?,
    }
    let truncated = total.is_none_or(|n| n > shown as u64);
    if truncated {
        let of = total.map_or_else(|| format!("more than {}", u64::MAX), |n| n.to_string());
        ui::display_warning(err, &format!("showing {} of {} sequences", shown, of))?;
    }
    Ok(())
}

fn any_length_total(counter: &mut PartitionCounter, target: u32) -> Result<u64, EngineError> {
    let mut total: u64 = 0;
    for k in 1..=target {
        total = total
            .checked_add(counter.count(target, k)?)
            .ok_or(EngineError::CountOverflow { target, slots: k })?;
    }
    Ok(total)
}

fn write_parts(parts: Partitions, limit: usize, out: &mut dyn Write) -> io::Result<usize> {
    let mut shown = 0;
    for p in parts.take(limit) {
        writeln!(out, "{}", format_partition(&p))?;
        shown += 1;
    }
    Ok(shown)
}
