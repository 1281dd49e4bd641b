//! Bounded, most-recent-first history of played rounds.

use std::collections::VecDeque;

use crate::record::Round;

/// Capacity used when none (or zero) is requested
pub const DEFAULT_HISTORY_LENGTH: usize = 3;

/// Ordered list of recently played rounds
///
/// Index 0 is the most recent round. Pushing onto a full history drops the
/// oldest round. `Clone` produces an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    capacity: usize,
    rounds: VecDeque<Round>,
}

impl MoveHistory {
    /// Creates an empty history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LENGTH)
    }

    /// Creates an empty history holding at most `capacity` rounds
    ///
    /// A capacity of zero falls back to [`DEFAULT_HISTORY_LENGTH`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity > 0 {
            capacity
        } else {
            DEFAULT_HISTORY_LENGTH
        };
        MoveHistory {
            capacity,
            rounds: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds `round` as the most recent entry, evicting the oldest when full
    pub fn push(&mut self, round: Round) {
        if self.rounds.len() == self.capacity {
            self.rounds.pop_back();
        }
        self.rounds.push_front(round);
    }

    /// Returns an independent copy unaffected by later pushes to `self`
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Number of rounds currently held
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The round `index` places back, 0 being the most recent
    pub fn get(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// The most recent round
    pub fn latest(&self) -> Option<&Round> {
        self.rounds.front()
    }

    /// Iterates from the most recent round to the oldest
    pub fn rounds(&self) -> impl Iterator<Item = &Round> + '_ {
        self.rounds.iter()
    }

    /// Drops every round, keeping the capacity
    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}
