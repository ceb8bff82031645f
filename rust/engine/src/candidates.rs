//! Assembling hands whose card values add up to a target number.
//!
//! Values are the stored ones (Ace = 1). A hand can only use cards still in
//! the deck, so no value appears more often than the deck has cards of that
//! rank: never more than four.

use std::cmp::Ordering;

use tracing::debug;

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::hand::{compare_hands, Category, Hand, HAND_SIZE};
use crate::partition::{MAX_PART, MIN_PART};

/// Smallest sum five card values can reach.
pub const MIN_TARGET: u32 = HAND_SIZE as u32 * MIN_PART;
/// Largest sum five card values can reach.
pub const MAX_TARGET: u32 = HAND_SIZE as u32 * MAX_PART;

/// Distinct five-value multisets summing to `target` that the deck can supply,
/// each listed highest value first. Sets come out in descending lexicographic order.
pub fn candidate_value_sets(target: u32, deck: &Deck) -> Vec<[u8; HAND_SIZE]> {
    let mut available = [0usize; MAX_PART as usize + 1];
    for c in deck.cards() {
        available[c.value() as usize] += 1;
    }
    let mut out = Vec::new();
    let mut picked = Vec::with_capacity(HAND_SIZE);
    collect_sets(target, MAX_PART, &available, &mut picked, &mut out);
    debug!(sum = target, sets = out.len(), "candidate value sets");
    out
}

fn collect_sets(
    remaining: u32,
    max_value: u32,
    available: &[usize],
    picked: &mut Vec<u8>,
    out: &mut Vec<[u8; HAND_SIZE]>,
) {
    let slots = (HAND_SIZE - picked.len()) as u32;
    if slots == 0 {
        if remaining == 0 {
            let mut set = [0u8; HAND_SIZE];
            set.copy_from_slice(picked);
            out.push(set);
        }
        return;
    }
    // non-increasing values: everything left is at most max_value
    if remaining < slots * MIN_PART || remaining > slots * max_value {
        return;
    }
    for v in (MIN_PART..=max_value.min(remaining)).rev() {
        let used = picked.iter().filter(|&&p| p as u32 == v).count();
        if used >= available[v as usize] {
            continue;
        }
        picked.push(v as u8);
        collect_sets(remaining - v, v, available, picked, out);
        picked.pop();
    }
}

/// Every hand the deck can supply for one value multiset.
fn hands_for_values(values: &[u8; HAND_SIZE], deck: &Deck) -> Vec<Hand> {
    let mut partial: Vec<Vec<Card>> = vec![Vec::with_capacity(HAND_SIZE)];
    for (value, needed) in value_groups(values) {
        let Some(rank) = Rank::from_value(value) else {
            return Vec::new();
        };
        let mut pool: Vec<Card> = deck
            .cards()
            .iter()
            .filter(|c| c.rank == rank)
            .copied()
            .collect();
        pool.sort();
        let combos = combinations(&pool, needed);
        partial = partial
            .into_iter()
            .flat_map(|prefix| {
                combos.iter().map(move |combo| {
                    let mut cards = prefix.clone();
                    cards.extend_from_slice(combo);
                    cards
                })
            })
            .collect();
    }
    partial
        .into_iter()
        .filter_map(|cards| Hand::new(cards).ok())
        .collect()
}

fn value_groups(values: &[u8]) -> Vec<(u8, usize)> {
    let mut groups: Vec<(u8, usize)> = Vec::new();
    for &v in values {
        if let Some((last, n)) = groups.last_mut() {
            if *last == v {
                *n += 1;
                continue;
            }
        }
        groups.push((v, 1));
    }
    groups
}

fn combinations(pool: &[Card], k: usize) -> Vec<Vec<Card>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if pool.len() < k {
        return Vec::new();
    }
    let mut out = Vec::new();
    for (i, &first) in pool.iter().enumerate() {
        for mut rest in combinations(&pool[i + 1..], k - 1) {
            rest.insert(0, first);
            out.push(rest);
        }
    }
    out
}

/// The strongest hand drawable from `deck` whose values sum to `target`.
///
/// Among equally strong hands the first one met wins, so the result does not
/// depend on the order the deck happens to be in.
///
/// ```
/// use pokersum_engine::candidates::best_hand_for_target;
/// use pokersum_engine::deck::Deck;
/// use pokersum_engine::hand::Category;
///
/// let deck = Deck::new();
/// // 10 + J + Q + K + A(1) = 47
/// let best = best_hand_for_target(47, &deck).unwrap();
/// assert_eq!(best.category(), Category::RoyalStraightFlush);
/// assert!(best_hand_for_target(3, &deck).is_none());
/// ```
pub fn best_hand_for_target(target: u32, deck: &Deck) -> Option<Hand> {
    let mut best: Option<(Hand, Category)> = None;
    for values in candidate_value_sets(target, deck) {
        for hand in hands_for_values(&values, deck) {
            let category = hand.category();
            let better = match &best {
                Some((current, current_category)) => match category.cmp(current_category) {
                    Ordering::Equal => compare_hands(&hand, current) == Ordering::Greater,
                    ord => ord == Ordering::Greater,
                },
                None => true,
            };
            if better {
                best = Some((hand, category));
            }
        }
    }
    if let Some((hand, category)) = &best {
        debug!(sum = target, hand = %hand, category = %category, "best hand for target");
    }
    best.map(|(hand, _)| hand)
}

/// Targets for which the deck can still supply at least one hand.
pub fn achievable_targets(deck: &Deck) -> Vec<u32> {
    (MIN_TARGET..=MAX_TARGET)
        .filter(|&t| !candidate_value_sets(t, deck).is_empty())
        .collect()
}
