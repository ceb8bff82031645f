//! Build and targets command handlers.
//!
//! `build` finds the strongest five-card hand whose values sum to a target,
//! drawing from a full deck with some cards optionally taken out first.
//! `targets` lists the sums that deck can still reach.

use pokersum_engine::candidates::{achievable_targets, best_hand_for_target, candidate_value_sets};

use crate::commands::deck_without;
use crate::error::CliError;
use crate::formatters::{format_cards, SuitStyle};
use std::io::Write;

/// Handle the build command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when no hand from the remaining deck
/// reaches `target`, and `CliError::Engine` for bad card notation.
pub fn handle_build_command(
    target: u32,
    removed: &[String],
    style: SuitStyle,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let deck = deck_without(removed, err)?;
    let Some(hand) = best_hand_for_target(target, &deck) else {
        return Err(CliError::InvalidInput(format!(
            "no five-card hand sums to {}",
            target
        )));
    };
    let value_sets = candidate_value_sets(target, &deck).len();
    writeln!(out, "Target: {}", target)?;
    writeln!(out, "Value sets: {}", value_sets)?;
    writeln!(out, "Best: {}", format_cards(hand.cards(), style))?;
    writeln!(out, "Category: {}", hand.category())?;
    Ok(())
}

/// Handle the targets command.
pub fn handle_targets_command(
    removed: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let deck = deck_without(removed, err)?;
    let targets = achievable_targets(&deck);
    let listed = targets
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", listed)?;
    writeln!(out, "Total: {}", targets.len())?;
    Ok(())
}
