//! Deal command handler.
//!
//! Shuffles a seeded deck, deals five cards and classifies them. The seed is
//! printed so the deal can be reproduced.

use pokersum_engine::deck::Deck;

use crate::error::CliError;
use crate::formatters::{format_cards, SuitStyle};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - RNG seed; a random one is drawn when `None`
/// * `style` - Suit rendering
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    style: SuitStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();
    let hand = deck.deal_hand()?;
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Hand: {}", format_cards(hand.cards(), style))?;
    writeln!(out, "Category: {}", hand.category())?;
    writeln!(out, "Sum: {}", hand.value_sum())?;
    Ok(())
}
