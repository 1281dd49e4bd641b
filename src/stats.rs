//! Statistics collection for the move picker
//!
//! Counts how decisions were resolved and how feedback was applied over the
//! lifetime of a picker.

use std::collections::BTreeMap;

use crate::game::AnalysisMode;
use crate::policy::Reinforcement;

/// Counters gathered while deciding moves and applying feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerStatistics {
    /// Number of decisions made
    pub decisions: usize,

    /// Number of feedback events received
    pub feedback_events: usize,

    /// Feedback events that rewarded a leaf
    pub rewards: usize,

    /// Feedback events that punished a leaf
    pub punishments: usize,

    /// Feedback events whose outcome was ignored
    pub ignored: usize,

    /// Decisions per resolved depth
    pub depth_counts: BTreeMap<usize, usize>,

    /// Decisions per analysis mode, counted only when depth > 0
    pub mode_counts: BTreeMap<AnalysisMode, usize>,
}

impl PickerStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_decision(&mut self, depth: usize, mode: AnalysisMode) {
        self.decisions += 1;
        *self.depth_counts.entry(depth).or_insert(0) += 1;
        if depth > 0 {
            *self.mode_counts.entry(mode).or_insert(0) += 1;
        }
    }

    pub(crate) fn record_feedback(&mut self, reinforcement: Reinforcement) {
        self.feedback_events += 1;
        match reinforcement {
            Reinforcement::Reward => self.rewards += 1,
            Reinforcement::Punish => self.punishments += 1,
            Reinforcement::Ignore => self.ignored += 1,
        }
    }

    /// Share of decisions that looked at history at all
    pub fn history_usage(&self) -> f64 {
        if self.decisions == 0 {
            return 0.0;
        }
        let shallow = self.depth_counts.get(&0).copied().unwrap_or(0);
        (self.decisions - shallow) as f64 / self.decisions as f64
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        let depths = self
            .depth_counts
            .iter()
            .map(|(d, n)| format!("{}: {}", d, n))
            .collect::<Vec<_>>()
            .join(", ");
        let modes = self
            .mode_counts
            .iter()
            .map(|(m, n)| format!("{}: {}", m, n))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Move Picker Statistics:\n\
             - Decisions: {}\n\
             - Feedback events: {} (rewarded {}, punished {}, ignored {})\n\
             - History usage: {:.1}%\n\
             - Depths: {}\n\
             - Modes: {}",
            self.decisions,
            self.feedback_events,
            self.rewards,
            self.punishments,
            self.ignored,
            self.history_usage() * 100.0,
            depths,
            modes
        )
    }
}
