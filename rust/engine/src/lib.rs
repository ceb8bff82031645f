//! # pokersum-engine: Five-Card Hands and Card-Value Sums
//!
//! Classifies five-card poker hands, orders any two of them, and works out
//! which hands can be assembled from a deck so that their card values add up
//! to a target number.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), Ace stored low
//! - [`deck`] - The 52-card population with removal and seeded shuffling
//! - [`hand`] - Hand classification and the hand-vs-hand total order
//! - [`partition`] - Counting and listing value sequences that hit a sum
//! - [`candidates`] - Best drawable hand for a target sum
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersum_engine::hand::{compare_hands, Category, Hand};
//!
//! let boat: Hand = "2H 2S 2C 9D 9H".parse().unwrap();
//! let better: Hand = "3H 3S 3C 4D 4H".parse().unwrap();
//! assert_eq!(boat.category(), Category::FullHouse);
//! assert!(compare_hands(&better, &boat).is_gt());
//! ```
//!
//! ## Card-Value Sums
//!
//! ```rust
//! use pokersum_engine::partition::{count_partitions, PartitionEnumerator};
//!
//! assert_eq!(count_partitions(5, 1).unwrap(), 1);
//! assert_eq!(PartitionEnumerator::enumerate(3), vec![vec![1, 1, 1], vec![1, 2], vec![2, 1], vec![3]]);
//! ```

pub mod candidates;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod partition;
