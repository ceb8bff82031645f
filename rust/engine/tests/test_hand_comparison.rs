use std::cmp::Ordering;

use pokersum_engine::hand::{compare_hands, Hand, Showdown};

fn h(s: &str) -> Hand {
    s.parse().unwrap()
}

#[test]
fn higher_trips_win_full_house() {
    let twos = h("2H 2S 2C 9D 9H");
    let threes = h("3H 3S 3C 4D 4H");
    assert_eq!(compare_hands(&twos, &threes), Ordering::Less);
    assert_eq!(twos.showdown(&threes), Showdown::Less);
    assert!(threes.beats_or_ties(&twos));
}

#[test]
fn two_pair_decided_by_kicker() {
    let a = h("7H 7S 9C 9D 2H");
    let b = h("7C 7D 9H 9S 3C");
    assert!(compare_hands(&b, &a).is_gt());
    assert!(!a.beats_or_ties(&b));
}

#[test]
fn category_decides_before_ranks() {
    let pair_of_twos = h("2H 2S 3C 4D 6H");
    let ace_high = h("AH KS QC JD 9H");
    assert!(compare_hands(&pair_of_twos, &ace_high).is_gt());
    let flush = h("2H 7H 9H JH KH");
    let straight = h("10C JH QC KH AD");
    assert!(compare_hands(&flush, &straight).is_gt());
}

#[test]
fn ace_plays_high_in_tie_breaks() {
    let aces_full = h("AH AS AC 2D 2H");
    let kings_full = h("KH KS KC QD QH");
    assert!(compare_hands(&aces_full, &kings_full).is_gt());

    let pair_ace_kicker = h("5H 5S AC 3D 2H");
    let pair_king_kicker = h("5C 5D KC 3H 2S");
    assert!(compare_hands(&pair_ace_kicker, &pair_king_kicker).is_gt());

    let ace_high = h("AH 9S 7C 4D 2H");
    let king_high = h("KH QS JC 9D 8H");
    assert!(compare_hands(&ace_high, &king_high).is_gt());
}

#[test]
fn wheel_ace_is_never_counted_high() {
    let wheel = h("AH 2S 3C 4D 5H");
    let six_high = h("2H 3S 4C 5D 6H");
    assert_eq!(compare_hands(&wheel, &six_high), Ordering::Less);

    let steel_wheel = h("AD 2D 3D 4D 5D");
    let six_high_sf = h("2C 3C 4C 5C 6C");
    assert_eq!(compare_hands(&steel_wheel, &six_high_sf), Ordering::Less);

    let broadway = h("10C JH QC KH AD");
    let king_high = h("9C 10H JC QH KD");
    assert!(compare_hands(&broadway, &king_high).is_gt());
}

#[test]
fn flush_and_high_card_compare_top_card_only() {
    let a = h("AH 9H 7H 4H 2H");
    let b = h("AS KS QS JS 9S");
    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
    assert!(a.beats_or_ties(&b) && b.beats_or_ties(&a));

    let king_flush = h("KD QD 9D 5D 3D");
    assert!(compare_hands(&a, &king_flush).is_gt());
}

#[test]
fn royal_flushes_tie() {
    let hearts = h("10H JH QH KH AH");
    let spades = h("10S JS QS KS AS");
    assert_eq!(compare_hands(&hearts, &spades), Ordering::Equal);
    assert_eq!(hearts.showdown(&spades), Showdown::GreaterOrEqual);
    assert_eq!(spades.showdown(&hearts), Showdown::GreaterOrEqual);
}

#[test]
fn identical_ranks_in_other_suits_tie() {
    let a = h("7H 7S 9C 9D 2H");
    let b = h("7C 7D 9H 9S 2S");
    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
}

#[test]
fn order_is_antisymmetric_and_transitive() {
    let hands: Vec<Hand> = [
        "10H JH QH KH AH",
        "9S 10S JS QS KS",
        "AD 2D 3D 4D 5D",
        "9C 9D 9H 9S 2H",
        "AH AS AC 2D 2H",
        "2H 2S 2C 9D 9H",
        "2H 7H 9H JH KH",
        "10C JH QC KH AD",
        "AH 2S 3C 4D 5H",
        "QC QH QD 2S 7C",
        "QS QD QH 3S 7D",
        "7C 7D 9H 9S 3C",
        "7H 7S 9C 9D 2H",
        "AC AH 2S 3D 9C",
        "5H 5S AC 3D 2H",
        "AC KH 9S 8D 3C",
        "KH QS JC 9D 8H",
    ]
    .iter()
    .map(|s| h(s))
    .collect();

    for a in &hands {
        for b in &hands {
            let ab = compare_hands(a, b);
            assert_eq!(ab, compare_hands(b, a).reverse(), "{} vs {}", a, b);
            assert!(a.beats_or_ties(b) || b.beats_or_ties(a));
            for c in &hands {
                if a.beats_or_ties(b) && b.beats_or_ties(c) {
                    assert!(a.beats_or_ties(c), "{} >= {} >= {}", a, b, c);
                }
            }
        }
    }
}
