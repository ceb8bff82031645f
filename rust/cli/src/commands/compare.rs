//! Compare command handler.
//!
//! Classifies two hands and reports which one wins, or a tie when both have
//! the same category and tie-break ranks.

use std::cmp::Ordering;

use pokersum_engine::hand::{compare_hands, Hand};

use crate::commands::parse_hand;
use crate::error::CliError;
use crate::formatters::{format_cards, SuitStyle};
use std::io::Write;

/// Handle the compare command.
///
/// Prints one line per hand and a final `Result:` line: `A wins`, `B wins`, or `Tie`.
pub fn handle_compare_command(
    a: &str,
    b: &str,
    style: SuitStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand_a = parse_hand(&[a])?;
    let hand_b = parse_hand(&[b])?;
    write_hand_line(out, "A", &hand_a, style)?;
    write_hand_line(out, "B", &hand_b, style)?;
    let verdict = match compare_hands(&hand_a, &hand_b) {
        Ordering::Greater => "A wins",
        Ordering::Less => "B wins",
        Ordering::Equal => "Tie",
    };
    writeln!(out, "Result: {}", verdict)?;
    Ok(())
}

fn write_hand_line(
    out: &mut dyn Write,
    label: &str,
    hand: &Hand,
    style: SuitStyle,
) -> Result<(), CliError> {
    writeln!(
        out,
        "Hand {}: {} {}",
        label,
        format_cards(hand.cards(), style),
        hand.category()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: &str, b: &str) -> String {
        let mut out = Vec::new();
        handle_compare_command(a, b, SuitStyle::Ascii, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_house_trips_decide() {
        let output = run("2H 2S 2C 9D 9H", "3H 3S 3C 4D 4H");
        assert!(output.contains("Hand A: [9D 9H 2H 2S 2C] Full House"));
        assert!(output.ends_with("Result: B wins\n"));
    }

    #[test]
    fn test_two_pair_kicker() {
        let output = run("7H 7S 9C 9D 2H", "7C 7D 9H 9S 3C");
        assert!(output.ends_with("Result: B wins\n"));
    }

    #[test]
    fn test_tie_and_a_wins() {
        assert!(run("10H JH QH KH AH", "10S JS QS KS AS").ends_with("Result: Tie\n"));
        assert!(run("AC AH 2S 3D 9C", "AS KH 9S 8D 3C").ends_with("Result: A wins\n"));
    }

    #[test]
    fn test_bad_hand_is_error() {
        let mut out = Vec::new();
        assert!(handle_compare_command("AH", "2S 3S 4S 5S 6S", SuitStyle::Ascii, &mut out).is_err());
    }
}
