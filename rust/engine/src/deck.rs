use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, warn};

use crate::cards::{full_deck, Card, Rank};
use crate::errors::EngineError;
use crate::hand::{Hand, HAND_SIZE};

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// The fixed 52-card population that hands are drawn from.
///
/// A fresh deck holds every rank 1-13 in all four suits in rank-major order.
/// Cards only ever leave the deck (by [`Deck::remove`] or dealing) until
/// [`Deck::reset`] restores the full population.
///
/// # Examples
///
/// ```
/// use pokersum_engine::cards::{Card, Rank, Suit};
/// use pokersum_engine::deck::Deck;
///
/// let mut deck = Deck::new();
/// let ace = Card::new(Rank::Ace, Suit::Hearts);
/// assert!(deck.contains(&ace));
/// deck.remove(&ace).unwrap();
/// assert!(!deck.contains(&ace));
/// assert_eq!(deck.remaining(), 51);
/// assert!(deck.remove(&ace).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::new_with_seed(DEFAULT_SEED)
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// Removes one card. A missing card is reported, never ignored, and the
    /// deck is left as it was.
    pub fn remove(&mut self, card: &Card) -> Result<(), EngineError> {
        match self.cards.iter().position(|c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                debug!(card = %card, remaining = self.cards.len(), "card removed from deck");
                Ok(())
            }
            None => {
                warn!(card = %card, "card not found in deck");
                Err(EngineError::NotFound(*card))
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffles the cards still in the deck.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Deals five cards off the top. Nothing is dealt when fewer than five remain.
    pub fn deal_hand(&mut self) -> Result<Hand, EngineError> {
        if self.cards.len() < HAND_SIZE {
            return Err(EngineError::EmptyDeck);
        }
        let cards: Vec<Card> = self.cards.drain(..HAND_SIZE).collect();
        Hand::new(cards)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
    }
}
