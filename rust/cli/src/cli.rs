//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::MAX_SLOTS;

#[derive(Parser, Debug)]
#[command(
    name = "pokersum",
    version,
    about = "Classify and compare five-card hands, and find hands that sum to a number"
)]
pub struct PokersumCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify five cards, e.g. `classify 10H JH QH KH AH`
    Classify {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Compare two hands given as quoted card lists
    Compare {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Count ordered value sequences (values 1-13) that sum to a target
    Count {
        #[arg(long)]
        target: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_SLOTS as i64))]
        slots: Option<u32>,
    },
    /// List ordered value sequences that sum to a target
    Enumerate {
        #[arg(long)]
        target: u32,
        #[arg(long, conflicts_with = "any_length", value_parser = clap::value_parser!(u32).range(1..=MAX_SLOTS as i64))]
        slots: Option<u32>,
        /// Sequences of any length instead of a fixed slot count
        #[arg(long)]
        any_length: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Best hand from the deck whose values sum to a target
    Build {
        #[arg(long)]
        target: u32,
        /// Take a card out of the deck first (repeatable)
        #[arg(long = "remove")]
        removed: Vec<String>,
    },
    /// Targets the deck can still reach with five cards
    Targets {
        #[arg(long = "remove")]
        removed: Vec<String>,
    },
    /// Deal and classify one hand from a shuffled deck
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration
    Cfg,
}
