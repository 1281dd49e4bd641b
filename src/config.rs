//! Configuration options for the move picker
//!
//! This module defines the starting weights, forest depth and outcome
//! policy used when a [`MovePicker`](crate::MovePicker) is built.

use crate::game::ResultType;
use crate::history::DEFAULT_HISTORY_LENGTH;
use crate::policy::{OutcomePolicy, Reinforcement};
use crate::utils::leaf_weight;
use crate::{PickerError, Result};

/// Deepest lookback the forest can be built for
///
/// Each extra level triples the number of leaves per mode.
pub const MAX_SUPPORTED_DEPTH: usize = 6;

/// Configuration for the move picker
///
/// # Example
///
/// ```
/// use adaptive_rps::{PickerConfig, Reinforcement, ResultType};
///
/// let config = PickerConfig::default()
///     .with_max_depth(2)
///     .with_base_weight(10)
///     .with_reinforcement(ResultType::Draw, Reinforcement::Punish);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Weight unit shared by every selector
    ///
    /// Leaf categories get this times `3^(max_depth - depth)`.
    pub base_weight: u32,

    /// Multiplier for each depth category in the depth meta-selector
    pub depth_weight: u32,

    /// Multiplier for each mode category in the mode meta-selector
    pub mode_weight: u32,

    /// Deepest lookback, in rounds
    pub max_depth: usize,

    /// Capacity of histories created with `MovePicker::new_history`
    pub history_length: usize,

    /// Reinforcement applied for each outcome
    pub outcome_policy: OutcomePolicy,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            base_weight: 24,
            depth_weight: 54,
            mode_weight: 54,
            max_depth: 3,
            history_length: DEFAULT_HISTORY_LENGTH,
            outcome_policy: OutcomePolicy::default(),
        }
    }
}

impl PickerConfig {
    /// Sets the shared weight unit
    pub fn with_base_weight(mut self, weight: u32) -> Self {
        self.base_weight = weight;
        self
    }

    /// Sets the depth meta-selector multiplier
    pub fn with_depth_weight(mut self, weight: u32) -> Self {
        self.depth_weight = weight;
        self
    }

    /// Sets the mode meta-selector multiplier
    pub fn with_mode_weight(mut self, weight: u32) -> Self {
        self.mode_weight = weight;
        self
    }

    /// Sets the deepest lookback
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the capacity of new histories
    ///
    /// Must be at least `max_depth`, or the deeper levels could never be
    /// reached. Zero means [`DEFAULT_HISTORY_LENGTH`].
    pub fn with_history_length(mut self, length: usize) -> Self {
        self.history_length = length;
        self
    }

    /// Replaces the whole outcome policy
    pub fn with_outcome_policy(mut self, policy: OutcomePolicy) -> Self {
        self.outcome_policy = policy;
        self
    }

    /// Sets the reinforcement for a single outcome
    pub fn with_reinforcement(mut self, outcome: ResultType, reinforcement: Reinforcement) -> Self {
        self.outcome_policy.set(outcome, reinforcement);
        self
    }

    /// Per-category weight of each depth meta-selector entry
    pub(crate) fn depth_category_weight(&self) -> Option<u32> {
        self.depth_weight.checked_mul(self.base_weight)
    }

    /// Per-category weight of each mode meta-selector entry
    pub(crate) fn mode_category_weight(&self) -> Option<u32> {
        self.mode_weight.checked_mul(self.base_weight)
    }

    /// Checks that a forest can be built from this configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_weight == 0 {
            return Err(invalid("base_weight must be positive"));
        }
        if self.depth_weight == 0 || self.mode_weight == 0 {
            return Err(invalid("meta-selector weights must be positive"));
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(invalid(format!(
                "max_depth {} exceeds supported maximum {}",
                self.max_depth, MAX_SUPPORTED_DEPTH
            )));
        }
        let history_length = if self.history_length > 0 {
            self.history_length
        } else {
            DEFAULT_HISTORY_LENGTH
        };
        if history_length < self.max_depth {
            return Err(invalid(format!(
                "history_length {} is shorter than max_depth {}",
                history_length, self.max_depth
            )));
        }
        let root_weight = leaf_weight(self.base_weight, self.max_depth, 0)
            .ok_or_else(|| invalid("leaf weights overflow"))?;
        // three categories share each leaf
        root_weight
            .checked_mul(3)
            .ok_or_else(|| invalid("leaf weights overflow"))?;

        let depths = self.max_depth as u32 + 1;
        self.depth_category_weight()
            .and_then(|w| w.checked_mul(depths))
            .ok_or_else(|| invalid("depth weights overflow"))?;
        self.mode_category_weight()
            .and_then(|w| w.checked_mul(5))
            .ok_or_else(|| invalid("mode weights overflow"))?;
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> PickerError {
    PickerError::InvalidConfiguration(message.into())
}
