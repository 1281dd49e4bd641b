//! Reinforcement policies applied when round outcomes are fed back
//!
//! Each outcome (win, loss, draw) is mapped to exactly one [`Reinforcement`].
//! Setting a new reinforcement for an outcome replaces whatever it had.

use std::fmt;

use crate::game::ResultType;
use crate::selector::Selector;

/// What to do with a selector after an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reinforcement {
    /// Shift weight towards the picked value
    Reward,
    /// Shift weight away from the picked value
    Punish,
    /// Leave weights untouched
    Ignore,
}

impl Reinforcement {
    /// Applies this reinforcement to `value` in `selector`
    ///
    /// Returns true if weights were touched.
    pub fn apply<T>(&self, selector: &mut Selector<T>, value: &T) -> bool
    where
        T: Clone + PartialEq + fmt::Debug,
    {
        match self {
            Reinforcement::Reward => selector.reward(value),
            Reinforcement::Punish => selector.punish(value),
            Reinforcement::Ignore => false,
        }
    }

    pub fn is_ignore(&self) -> bool {
        matches!(self, Reinforcement::Ignore)
    }
}

impl fmt::Display for Reinforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reinforcement::Reward => "reward",
            Reinforcement::Punish => "punish",
            Reinforcement::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

/// Reinforcement chosen for each of the three outcomes
///
/// The default rewards wins, punishes losses and ignores draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomePolicy {
    win: Reinforcement,
    loss: Reinforcement,
    draw: Reinforcement,
}

impl OutcomePolicy {
    /// Creates a policy from explicit per-outcome reinforcements
    pub fn new(win: Reinforcement, loss: Reinforcement, draw: Reinforcement) -> Self {
        OutcomePolicy { win, loss, draw }
    }

    /// Reinforcement applied for `outcome`
    pub fn get(&self, outcome: ResultType) -> Reinforcement {
        match outcome {
            ResultType::Win => self.win,
            ResultType::Loss => self.loss,
            ResultType::Draw => self.draw,
        }
    }

    /// Replaces the reinforcement for `outcome`
    pub fn set(&mut self, outcome: ResultType, reinforcement: Reinforcement) {
        match outcome {
            ResultType::Win => self.win = reinforcement,
            ResultType::Loss => self.loss = reinforcement,
            ResultType::Draw => self.draw = reinforcement,
        }
    }

    /// Builder form of [`OutcomePolicy::set`]
    pub fn with(mut self, outcome: ResultType, reinforcement: Reinforcement) -> Self {
        self.set(outcome, reinforcement);
        self
    }
}

impl Default for OutcomePolicy {
    fn default() -> Self {
        OutcomePolicy {
            win: Reinforcement::Reward,
            loss: Reinforcement::Punish,
            draw: Reinforcement::Ignore,
        }
    }
}
