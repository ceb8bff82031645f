//! Classify command handler.
//!
//! Parses five cards, prints them in canonical order with the category name,
//! its rank, and the card-value sum.

use crate::commands::parse_hand;
use crate::error::CliError;
use crate::formatters::{format_cards, SuitStyle};
use std::io::Write;

/// Handle the classify command.
///
/// # Arguments
///
/// * `cards` - Card notations; a token may hold several cards separated by spaces or commas
/// * `style` - Suit rendering
/// * `out` - Output stream for command results
///
/// # Errors
///
/// Returns `CliError::Engine` for bad notation or a card count other than five.
pub fn handle_classify_command(
    cards: &[String],
    style: SuitStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_hand(cards)?;
    let category = hand.category();
    writeln!(out, "Hand: {}", format_cards(hand.cards(), style))?;
    writeln!(out, "Category: {} (rank {})", category, category.rank())?;
    writeln!(out, "Sum: {}", hand.value_sum())?;
    Ok(())
}
