use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{all_ranks, Card, Rank};
use crate::errors::EngineError;

pub const HAND_SIZE: usize = 5;

/// The ten poker hand classes. The discriminant is the category rank, so the
/// derived `Ord` and [`Category::rank`] always agree.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalStraightFlush = 10,
}

impl Category {
    /// Every category, weakest first.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalStraightFlush,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalStraightFlush => "Royal Straight Flush",
        }
    }
}

// ALL must list ranks 1..=10 in order, each exactly once.
const _: () = {
    let mut i = 0;
    while i < Category::ALL.len() {
        assert!(Category::ALL[i] as usize == i + 1);
        i += 1;
    }
};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many cards of each rank a hand holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFrequencyTable {
    // indexed by low value, slot 0 unused
    counts: [u8; 14],
}

impl ValueFrequencyTable {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 14];
        for c in cards {
            counts[c.value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    /// Present ranks with their counts, in low-value order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        all_ranks()
            .into_iter()
            .map(|r| (r, self.count(r)))
            .filter(|&(_, n)| n > 0)
    }

    /// The non-zero counts, largest first: `[3, 2]` for a full house.
    pub fn shape(&self) -> Vec<u8> {
        let mut shape: Vec<u8> = self.iter().map(|(_, n)| n).collect();
        shape.sort_unstable_by(|a, b| b.cmp(a));
        shape
    }

    /// Present ranks (Ace as 14) ordered by count, then by value, both descending.
    pub fn ranking_key(&self) -> Vec<u8> {
        let mut entries: Vec<(u8, u8)> = self.iter().map(|(r, n)| (n, r.high_value())).collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.into_iter().map(|(_, v)| v).collect()
    }
}

/// Outcome of [`Hand::showdown`] from the point of view of the left hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Showdown {
    GreaterOrEqual,
    Less,
}

impl From<Ordering> for Showdown {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Showdown::Less,
            Ordering::Equal | Ordering::Greater => Showdown::GreaterOrEqual,
        }
    }
}

/// Exactly five cards, held in descending stored-rank order (Aces last).
///
/// ```
/// use pokersum_engine::hand::{Category, Hand};
///
/// let royal: Hand = "10H JH QH KH AH".parse().unwrap();
/// assert_eq!(royal.category(), Category::RoyalStraightFlush);
///
/// let wheel: Hand = "AH 2S 3C 4D 5H".parse().unwrap();
/// assert_eq!(wheel.category(), Category::Straight);
/// assert!(royal.beats_or_ties(&wheel));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Result<Hand, EngineError> {
        let mut cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|v: Vec<Card>| EngineError::InvalidHandSize { actual: v.len() })?;
        // stable: equal ranks keep their given order
        cards.sort_by(|a, b| b.value().cmp(&a.value()));
        Ok(Hand { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Sum of the stored values, Ace counting 1.
    pub fn value_sum(&self) -> u32 {
        self.cards.iter().map(|c| c.value() as u32).sum()
    }

    pub fn frequencies(&self) -> ValueFrequencyTable {
        ValueFrequencyTable::from_cards(&self.cards)
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|c| c.suit == suit)
    }

    /// Five distinct ranks in a run. The Ace closes either end: A-2-3-4-5 or 10-J-Q-K-A.
    pub fn is_straight(&self) -> bool {
        if self.frequencies().distinct() != HAND_SIZE {
            return false;
        }
        let high = self.cards[0].value();
        let low = self.cards[HAND_SIZE - 1].value();
        high - low == 4 || self.has_broadway_ranks()
    }

    /// A-2-3-4-5, the only shape where the Ace plays low.
    pub fn is_wheel(&self) -> bool {
        self.values() == [5, 4, 3, 2, 1]
    }

    /// Exactly the ranks 10, J, Q, K, A.
    pub fn has_broadway_ranks(&self) -> bool {
        self.values() == [13, 12, 11, 10, 1]
    }

    pub fn category(&self) -> Category {
        classify(self)
    }

    /// Card values as used for comparison, highest first. The Ace is 14
    /// unless it sits at the bottom of a wheel, where it is 1.
    pub fn resolved_values(&self) -> [u8; HAND_SIZE] {
        if self.is_wheel() {
            return self.values();
        }
        let mut v = self.cards.map(|c| c.rank.high_value());
        v.sort_unstable_by(|a, b| b.cmp(a));
        v
    }

    pub fn top_value(&self) -> u8 {
        self.resolved_values()[0]
    }

    /// Tie-break key for same-category hands: ranks by frequency then value,
    /// with the wheel's Ace kept low.
    pub fn ranking_key(&self) -> Vec<u8> {
        if self.is_wheel() {
            return self.values().to_vec();
        }
        self.frequencies().ranking_key()
    }

    pub fn beats_or_ties(&self, other: &Hand) -> bool {
        self.showdown(other) == Showdown::GreaterOrEqual
    }

    pub fn showdown(&self, other: &Hand) -> Showdown {
        compare_hands(self, other).into()
    }

    fn values(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|c| c.value())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EngineError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards.to_vec())
    }
}

impl FromStr for Hand {
    type Err = EngineError;

    /// Card notations separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|tok| !tok.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(cards)
    }
}

/// Computes the single category a hand belongs to.
///
/// The arms are tried top to bottom. Straights need five distinct ranks, so
/// no straight can also carry a pair shape and every hand lands in exactly
/// one arm.
pub fn classify(hand: &Hand) -> Category {
    let shape = hand.frequencies().shape();
    let straight = hand.is_straight();
    let flush = hand.is_flush();
    let category = match (shape.as_slice(), straight, flush) {
        (_, true, true) if hand.has_broadway_ranks() => Category::RoyalStraightFlush,
        (_, true, true) => Category::StraightFlush,
        // five of one rank only arises from duplicate cards
        ([5] | [4, 1], _, _) => Category::FourOfAKind,
        ([3, 2], _, _) => Category::FullHouse,
        (_, _, true) => Category::Flush,
        (_, true, false) => Category::Straight,
        ([3, 1, 1], _, _) => Category::ThreeOfAKind,
        ([2, 2, 1], _, _) => Category::TwoPair,
        ([2, 1, 1, 1], _, _) => Category::OnePair,
        _ => Category::HighCard,
    };
    debug!(hand = %hand, category = %category, "hand classified");
    category
}

/// Total order between two hands: category first, then the same-category tie-break.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    let (ca, cb) = (a.category(), b.category());
    let ord = match ca.cmp(&cb) {
        Ordering::Equal => compare_same_category(a, b, ca),
        ord => ord,
    };
    debug!(left = %a, right = %b, category = %ca, ?ord, "hands compared");
    ord
}

fn compare_same_category(a: &Hand, b: &Hand, category: Category) -> Ordering {
    match category {
        Category::RoyalStraightFlush => Ordering::Equal,
        Category::StraightFlush | Category::Flush | Category::HighCard => {
            a.top_value().cmp(&b.top_value())
        }
        _ => a.ranking_key().cmp(&b.ranking_key()),
    }
}
