//! Card, hand, and partition formatters for terminal display.
//!
//! This module provides pure functions for formatting cards, hands, and value
//! sequences for terminal output. It supports Unicode suit symbols with an
//! ASCII fallback for terminals that don't render them.
//!
//! ## Unicode vs ASCII Fallback
//!
//! [`SuitStyle::detect`] checks environment variables on Windows (WT_SESSION,
//! TERM_PROGRAM, VSCODE_INJECTION) and assumes Unicode support on Unix-like
//! systems. The `ascii` configuration flag forces the fallback.
//!
//! - **Unicode mode**: Uses ♥ ♠ ♣ ♦ symbols
//! - **ASCII mode**: Uses H S C D letters, which parse back as card notation
//!
//! ## Example
//!
//! ```rust
//! use pokersum_engine::cards::{Card, Rank, Suit};
//! use pokersum_cli::formatters::{format_card, format_cards, SuitStyle};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(&ace_spades, SuitStyle::Unicode), "A♠");
//! assert_eq!(format_card(&ace_spades, SuitStyle::Ascii), "AS");
//!
//! assert_eq!(format_cards(&[ace_spades], SuitStyle::Ascii), "[AS]");
//! ```

use pokersum_engine::cards::{Card, Suit};

/// How suits are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitStyle {
    Unicode,
    Ascii,
}

impl SuitStyle {
    /// Picks ASCII when forced, otherwise whatever the terminal supports.
    pub fn detect(force_ascii: bool) -> Self {
        if force_ascii || !supports_unicode() {
            SuitStyle::Ascii
        } else {
            SuitStyle::Unicode
        }
    }
}

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit, style: SuitStyle) -> char {
    match style {
        SuitStyle::Unicode => suit.symbol(),
        SuitStyle::Ascii => suit.letter(),
    }
}

/// Format a Card as rank label plus suit, e.g. "10♥" or "10H".
pub fn format_card(card: &Card, style: SuitStyle) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit, style))
}

/// Format cards in bracket notation.
///
/// # Returns
///
/// Formatted string like "[A♠ K♥ Q♦]" or "[]" if empty
pub fn format_cards(cards: &[Card], style: SuitStyle) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, style)).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format a value sequence as "1 + 2 + 3".
pub fn format_partition(parts: &[u8]) -> String {
    parts
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}
