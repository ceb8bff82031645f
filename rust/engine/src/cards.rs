use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Value the Ace takes when it plays high.
pub const ACE_HIGH: u8 = 14;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
}

impl Suit {
    /// Accepts the letter form (`H`, `S`, `C`, `D`, either case) or the symbol form.
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'H' | 'h' | '♥' => Some(Suit::Hearts),
            'S' | 's' | '♠' => Some(Suit::Spades),
            'C' | 'c' | '♣' => Some(Suit::Clubs),
            'D' | 'd' | '♦' => Some(Suit::Diamonds),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
///
/// The stored value is the low form: the Ace is 1. Comparisons that need the
/// Ace high go through [`Rank::high_value`], which never changes the card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1, or 14 when playing high)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Returns `None` outside 1..=13. The high Ace form (14) is not an input.
    pub fn from_value(v: u8) -> Option<Rank> {
        let rank = match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return None,
        };
        Some(rank)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn high_value(self) -> u8 {
        match self {
            Rank::Ace => ACE_HIGH,
            other => other.value(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Represents a single playing card with a rank and a suit.
/// Cards are plain values: once built they never change, and the Deck is what
/// keeps them unique.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King, Ace stored low)
    pub rank: Rank,
    /// The suit of the card (Hearts, Spades, Clubs, or Diamonds)
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from its raw parts, rejecting anything outside the
    /// 1..=13 value range or the four suit letters.
    ///
    /// ```
    /// use pokersum_engine::cards::{Card, Rank, Suit};
    ///
    /// let c = Card::try_new(1, 'H').unwrap();
    /// assert_eq!(c, Card::new(Rank::Ace, Suit::Hearts));
    /// assert!(Card::try_new(14, 'H').is_err());
    /// ```
    pub fn try_new(value: u8, suit: char) -> Result<Card, EngineError> {
        match (Rank::from_value(value), Suit::from_symbol(suit)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(EngineError::InvalidCard { value, suit }),
        }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses `AH`, `10♥`, `qs`, `1D`, `TC`: a rank token followed by one suit character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| EngineError::InvalidCardNotation(s.to_string()))?;
        let token = chars.as_str();
        let value = match token.to_ascii_uppercase().as_str() {
            "A" => 1,
            "K" => 13,
            "Q" => 12,
            "J" => 11,
            "T" => 10,
            digits => digits
                .parse::<u8>()
                .map_err(|_| EngineError::InvalidCardNotation(s.to_string()))?,
        };
        Card::try_new(value, suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// The 52-card population, rank-major: every suit of the Ace, then every suit of the Two, and so on.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_and_symbol_notation() {
        assert_eq!("AH".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("10♠".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("tc".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!("13D".parse::<Card>(), Ok(Card::new(Rank::King, Suit::Diamonds)));
    }

    #[test]
    fn rejects_values_outside_domain() {
        assert_eq!(
            Card::try_new(0, 'H'),
            Err(EngineError::InvalidCard { value: 0, suit: 'H' })
        );
        assert_eq!(
            "14H".parse::<Card>(),
            Err(EngineError::InvalidCard { value: 14, suit: 'H' })
        );
        assert_eq!(
            Card::try_new(5, 'X'),
            Err(EngineError::InvalidCard { value: 5, suit: 'X' })
        );
        assert!(matches!(
            "ZZ".parse::<Card>(),
            Err(EngineError::InvalidCardNotation(_))
        ));
        assert!(matches!(
            "".parse::<Card>(),
            Err(EngineError::InvalidCardNotation(_))
        ));
    }

    #[test]
    fn ace_high_view_does_not_touch_stored_rank() {
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(ace.value(), 1);
        assert_eq!(ace.rank.high_value(), ACE_HIGH);
        assert_eq!(Rank::King.high_value(), 13);
    }

    #[test]
    fn display_uses_suit_symbols() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        let unique: std::collections::HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), 52);
    }
}
