//! Command handler modules for the pokersum CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and resolved
//!   settings are passed as parameters, so handlers never read the environment
//! - Error propagation: All errors propagated via `CliError` enum

mod build;
mod cfg;
mod classify;
mod compare;
mod count;
mod deal;
pub(crate) mod enumerate;

pub use build::{handle_build_command, handle_targets_command};
pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use compare::handle_compare_command;
pub use count::handle_count_command;
pub use deal::handle_deal_command;
pub use enumerate::handle_enumerate_command;

use std::io::Write;

use pokersum_engine::cards::Card;
use pokersum_engine::deck::Deck;
use pokersum_engine::errors::EngineError;
use pokersum_engine::hand::Hand;

use crate::error::CliError;
use crate::ui;

/// Parses a hand from command-line tokens, each of which may hold several cards.
pub(crate) fn parse_hand<S: AsRef<str>>(tokens: &[S]) -> Result<Hand, CliError> {
    let joined = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(joined.parse::<Hand>()?)
}

/// A full deck minus the named cards. Cards already gone only produce a warning.
pub(crate) fn deck_without(removed: &[String], err: &mut dyn Write) -> Result<Deck, CliError> {
    let mut deck = Deck::new();
    for notation in removed {
        let card: Card = notation.parse()?;
        match deck.remove(&card) {
            Ok(()) => {}
            Err(EngineError::NotFound(c)) => {
                ui::display_warning(err, &format!("{} is not in the deck, skipped", c))?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(deck)
}
