//! Counting and listing the ordered ways a target sum splits into card values.
//!
//! Every part is a card value in `1..=13`. Sequences are ordered, so `[1, 2]`
//! and `[2, 1]` are different partitions of 3.

use std::collections::HashMap;

use tracing::trace;

use crate::errors::EngineError;
use crate::hand::HAND_SIZE;

/// Smallest card value a part may take (the low Ace).
pub const MIN_PART: u32 = 1;
/// Largest card value a part may take (the King).
pub const MAX_PART: u32 = 13;

/// Memoized partition counting keyed by `(sum, slots)`.
///
/// One counter is one counting session: the memo lives as long as the value
/// and is never shared between counters. Results are the same whether a
/// counter is reused or a fresh one is made per call.
///
/// ```
/// use pokersum_engine::partition::PartitionCounter;
///
/// let mut counter = PartitionCounter::new();
/// assert_eq!(counter.count(5, 1).unwrap(), 1);
/// assert_eq!(counter.count(2, 2).unwrap(), 1);
/// assert_eq!(counter.count(4, 2).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartitionCounter {
    memo: HashMap<(u32, u32), u64>,
}

impl PartitionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of length-`slots` sequences of values in `1..=13` summing to `target`.
    ///
    /// Only two base cases exist: no slots gives 0, one slot gives 1 exactly
    /// when the target is itself a card value. Everything else, small sums
    /// included, goes through the general step
    /// `count(n, k) = sum of count(n - v, k - 1) for v in 1..=13`.
    ///
    /// The step is applied row by row from one slot upward, so neither stack
    /// depth nor memory grows with `slots` beyond one row of partial sums.
    /// Answers are memoized per `(target, slots)` for the session.
    pub fn count(&mut self, target: u32, slots: u32) -> Result<u64, EngineError> {
        if slots == 0 {
            return Ok(0);
        }
        if slots == 1 {
            return Ok(u64::from((MIN_PART..=MAX_PART).contains(&target)));
        }
        let (n, k) = (u64::from(target), u64::from(slots));
        if n < k * u64::from(MIN_PART) || n > k * u64::from(MAX_PART) {
            return Ok(0);
        }
        if let Some(&total) = self.memo.get(&(target, slots)) {
            return Ok(total);
        }
        trace!(sum = target, slots, "partition state miss");
        let total = count_rows(n, k).ok_or(EngineError::CountOverflow { target, slots })?;
        self.memo.insert((target, slots), total);
        Ok(total)
    }

    /// Number of memoized states so far.
    pub fn cached_states(&self) -> usize {
        self.memo.len()
    }
}

/// Partial sums after `used` of `slots` parts that can still end at `target`.
fn row_bounds(target: u64, slots: u64, used: u64) -> (u64, u64) {
    let (min, max) = (u64::from(MIN_PART), u64::from(MAX_PART));
    let left = slots - used;
    let lo = (used * min).max(target.saturating_sub(left * max));
    let hi = (used * max).min(target - left * min);
    (lo, hi)
}

/// Bottom-up evaluation of the counting step over the reachable window of
/// each row. `None` when a cell overflows; every cell in the window feeds the
/// final answer, so the answer overflows too.
fn count_rows(target: u64, slots: u64) -> Option<u64> {
    let (mut lo, hi) = row_bounds(target, slots, 1);
    // one slot: each card value is one sequence
    let mut row: Vec<u64> = vec![1; (hi - lo + 1) as usize];
    for used in 2..=slots {
        let (next_lo, next_hi) = row_bounds(target, slots, used);
        let mut next = Vec::with_capacity((next_hi - next_lo + 1) as usize);
        for sum in next_lo..=next_hi {
            let mut cell: u64 = 0;
            for v in u64::from(MIN_PART)..=u64::from(MAX_PART) {
                let Some(prev) = sum.checked_sub(v) else {
                    break;
                };
                if prev < lo || prev >= lo + row.len() as u64 {
                    continue;
                }
                cell = cell.checked_add(row[(prev - lo) as usize])?;
            }
            next.push(cell);
        }
        row = next;
        lo = next_lo;
    }
    row.first().copied()
}

/// Counts with a fresh session.
pub fn count_partitions(target: u32, slots: u32) -> Result<u64, EngineError> {
    PartitionCounter::new().count(target, slots)
}

/// Lists partitions rather than counting them.
///
/// Each step picks a value and continues with what is left of the target.
/// Output is in lexicographic order of the sequences.
pub struct PartitionEnumerator;

impl PartitionEnumerator {
    /// All sequences of any length summing to `target`. A zero target has
    /// none, a target of one has only `[1]`.
    ///
    /// The result grows roughly as `2^(target - 1)`; keep targets small or
    /// use [`PartitionEnumerator::iter`].
    pub fn enumerate(target: u32) -> Vec<Vec<u8>> {
        Self::iter(target).collect()
    }

    /// Sequences of exactly `slots` parts. Always as many as
    /// [`PartitionCounter::count`] reports for the same arguments.
    pub fn enumerate_slots(target: u32, slots: u32) -> Vec<Vec<u8>> {
        Self::iter_slots(target, slots).collect()
    }

    /// Sequences that could be the values of a five-card hand.
    pub fn enumerate_hand_sized(target: u32) -> Vec<Vec<u8>> {
        Self::enumerate_slots(target, HAND_SIZE as u32)
    }

    /// Lazy form of [`PartitionEnumerator::enumerate`].
    pub fn iter(target: u32) -> Partitions {
        Partitions::new(target, None)
    }

    /// Lazy form of [`PartitionEnumerator::enumerate_slots`].
    ///
    /// ```
    /// use pokersum_engine::partition::PartitionEnumerator;
    ///
    /// let first: Vec<Vec<u8>> = PartitionEnumerator::iter_slots(104, 16).take(2).collect();
    /// assert_eq!(first[0][..4], [1, 1, 1, 1]);
    /// assert_eq!(first.len(), 2);
    /// ```
    pub fn iter_slots(target: u32, slots: u32) -> Partitions {
        Partitions::new(target, Some(slots))
    }
}

pub fn enumerate_partitions(target: u32) -> Vec<Vec<u8>> {
    PartitionEnumerator::enumerate(target)
}

/// Iterator over partitions in lexicographic order.
///
/// Holds only the current sequence; the next one is found by backtracking
/// over it, so nothing is built ahead of what the caller takes.
#[derive(Debug, Clone)]
pub struct Partitions {
    path: Vec<u8>,
    remaining: u32,
    slots: Option<u32>,
    started: bool,
    done: bool,
}

impl Partitions {
    fn new(target: u32, slots: Option<u32>) -> Self {
        let feasible = target > 0
            && match slots {
                Some(k) => k > 0 && fits(target, k),
                None => true,
            };
        Partitions {
            path: Vec::new(),
            remaining: target,
            slots,
            started: false,
            done: !feasible,
        }
    }

    /// Parts still to place after the current path, `None` for any length.
    fn left(&self) -> Option<u32> {
        self.slots.map(|k| k - self.path.len() as u32)
    }

    fn can_take(&self, v: u32) -> bool {
        if v > MAX_PART || v > self.remaining {
            return false;
        }
        match self.left() {
            Some(k) => fits(self.remaining - v, k - 1),
            None => true,
        }
    }

    fn push(&mut self, v: u32) {
        self.path.push(v as u8);
        self.remaining -= v;
    }

    /// Extends the path with the smallest value that keeps it completable
    /// until it is a full sequence.
    fn descend(&mut self) {
        loop {
            let complete = match self.left() {
                Some(k) => k == 0,
                None => self.remaining == 0,
            };
            if complete {
                return;
            }
            let smallest = match self.left() {
                Some(k) => {
                    let above = u64::from(self.remaining)
                        .saturating_sub(u64::from(k - 1) * u64::from(MAX_PART));
                    above.max(u64::from(MIN_PART)) as u32
                }
                None => MIN_PART,
            };
            self.push(smallest);
        }
    }

    /// Moves to the next sequence; false once the last one has been seen.
    fn advance(&mut self) -> bool {
        while let Some(v) = self.path.pop() {
            let v = u32::from(v);
            self.remaining += v;
            if let Some(w) = (v + 1..=MAX_PART).find(|&w| self.can_take(w)) {
                self.push(w);
                self.descend();
                return true;
            }
        }
        false
    }
}

impl Iterator for Partitions {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.descend();
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.path.clone())
    }
}

/// Whether `sum` can be split into exactly `slots` card values.
fn fits(sum: u32, slots: u32) -> bool {
    let (sum, slots) = (u64::from(sum), u64::from(slots));
    sum >= slots * u64::from(MIN_PART) && sum <= slots * u64::from(MAX_PART)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_is_owned_by_the_session() {
        let mut counter = PartitionCounter::new();
        assert_eq!(counter.cached_states(), 0);
        counter.count(20, 4).unwrap();
        let after_first = counter.cached_states();
        assert!(after_first > 0);
        counter.count(20, 4).unwrap();
        assert_eq!(counter.cached_states(), after_first);
        assert_eq!(PartitionCounter::new().cached_states(), 0);
    }

    #[test]
    fn iterator_respects_slot_budget() {
        let parts: Vec<Vec<u8>> = Partitions::new(3, Some(2)).collect();
        assert_eq!(parts, vec![vec![1, 2], vec![2, 1]]);
        assert_eq!(Partitions::new(27, Some(2)).next(), None);
    }

    #[test]
    fn rows_only_keep_reachable_sums() {
        assert_eq!(row_bounds(30, 4, 1), (1, 13));
        assert_eq!(row_bounds(50, 4, 3), (37, 39));
        assert_eq!(count_rows(4, 2), Some(3));
        assert_eq!(count_rows(52, 4), Some(1));
    }

    #[test]
    fn smallest_first_value_leaves_room_for_the_rest() {
        let parts: Vec<Vec<u8>> = Partitions::new(38, Some(3)).collect();
        assert_eq!(parts, vec![vec![12, 13, 13], vec![13, 12, 13], vec![13, 13, 12]]);
        assert_eq!(Partitions::new(40, Some(3)).next(), None);
    }
}
