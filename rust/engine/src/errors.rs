use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card: value {value}, suit {suit:?} (values 1-13, suits H S C D)")]
    InvalidCard { value: u8, suit: char },
    #[error("Invalid card notation: {0:?}")]
    InvalidCardNotation(String),
    #[error("A hand needs exactly 5 cards, got {actual}")]
    InvalidHandSize { actual: usize },
    #[error("Card {0} is not in the deck")]
    NotFound(Card),
    #[error("Partition count overflowed for target {target} with {slots} slots")]
    CountOverflow { target: u32, slots: u32 },
    #[error("Deck is empty")]
    EmptyDeck,
}
