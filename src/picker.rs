//! The adaptive move picker
//!
//! Picking a move runs in three steps: draw a lookback depth from the depth
//! meta-selector, draw an analysis mode from the mode meta-selector, then
//! resolve the leaf those two select against the history and draw from it.
//! Feedback resolves the same leaf again from the decision's frozen history
//! and reinforces it together with the meta-selectors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    config::PickerConfig,
    forest::SelectionForest,
    game::{AnalysisMode, ResultType, ANALYSIS_MODES},
    history::MoveHistory,
    policy::{OutcomePolicy, Reinforcement},
    record::{Decision, SelectionMethod},
    selector::Selector,
    stats::PickerStatistics,
    PickerError, Result,
};

/// Picks moves from recent history and learns from round outcomes
///
/// A picker owns every selector it draws from. It is not synchronized:
/// use one picker per game, or wrap it in a mutex when sharing.
pub struct MovePicker<R: Rng = StdRng> {
    /// Configuration the picker was built from
    config: PickerConfig,

    /// Reinforcement applied for each outcome
    policy: OutcomePolicy,

    /// Chooses how many rounds to look back
    depth_selector: Selector<usize>,

    /// Chooses which field of each round to look at
    mode_selector: Selector<AnalysisMode>,

    /// Leaf selectors for every (mode, history) combination
    forest: SelectionForest,

    /// Source of randomness for every pick
    rng: R,

    /// Counters gathered so far
    statistics: PickerStatistics,
}

impl MovePicker<StdRng> {
    /// Creates a picker seeded from system entropy
    pub fn new(config: PickerConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a picker with a fixed seed, for reproducible play
    pub fn seeded(config: PickerConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MovePicker<R> {
    /// Creates a picker that draws from `rng`
    pub fn with_rng(config: PickerConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let invalid = || PickerError::InvalidConfiguration("meta weights overflow".to_string());

        let mut depth_selector = Selector::new();
        let depth_weight = config.depth_category_weight().ok_or_else(invalid)?;
        for depth in 0..=config.max_depth {
            depth_selector.add_category(depth_weight, depth)?;
        }

        let mut mode_selector = Selector::new();
        let mode_weight = config.mode_category_weight().ok_or_else(invalid)?;
        for mode in ANALYSIS_MODES {
            mode_selector.add_category(mode_weight, mode)?;
        }

        let forest = SelectionForest::build(config.base_weight, config.max_depth)?;

        Ok(MovePicker {
            policy: config.outcome_policy,
            config,
            depth_selector,
            mode_selector,
            forest,
            rng,
            statistics: PickerStatistics::new(),
        })
    }

    /// Picks a move to play after `history`
    ///
    /// The drawn depth is clamped to the number of rounds available, so an
    /// empty history always draws from the root. Weights are not changed.
    pub fn decide_move(&mut self, history: &MoveHistory) -> Result<Decision> {
        let depth = self.depth_selector.pick(&mut self.rng)?.min(history.len());
        let mode = self.mode_selector.pick(&mut self.rng)?;

        let (key, leaf) = self.forest.resolve(depth, mode, history)?;
        let picked = leaf.pick(&mut self.rng)?;

        log::debug!("decided {} from leaf {} (depth {})", picked, key, depth);
        self.statistics.record_decision(depth, mode);

        Ok(Decision::new(
            picked,
            history.snapshot(),
            SelectionMethod::new(depth, mode),
        ))
    }

    /// Learns from the `outcome` of a previous decision
    ///
    /// The decision's leaf is resolved again from its own history snapshot.
    /// Unless the outcome is ignored, the leaf is reinforced on the picked
    /// value and the depth selector on the depth used; the mode selector is
    /// only reinforced for depths above one.
    pub fn feedback(&mut self, decision: &Decision, outcome: ResultType) -> Result<()> {
        let method = decision.selection_method();
        let (depth, mode) = (method.depth(), method.mode());

        let leaf = self
            .forest
            .resolve_mut(depth, mode, decision.assumed_history())?;

        let reinforcement = self.policy.get(outcome);
        self.statistics.record_feedback(reinforcement);
        if reinforcement.is_ignore() {
            log::debug!("ignoring {} for {}", outcome, decision.picked());
            return Ok(());
        }

        reinforcement.apply(leaf, &decision.picked());
        reinforcement.apply(&mut self.depth_selector, &depth);
        if depth > 1 {
            reinforcement.apply(&mut self.mode_selector, &mode);
        }

        log::debug!(
            "{} {} after {} (depth {}, mode {})",
            reinforcement,
            decision.picked(),
            outcome,
            depth,
            mode
        );
        Ok(())
    }

    /// Reinforcement currently applied for `outcome`
    pub fn reinforcement(&self, outcome: ResultType) -> Reinforcement {
        self.policy.get(outcome)
    }

    /// Replaces the reinforcement applied for `outcome`
    pub fn set_reinforcement(&mut self, outcome: ResultType, reinforcement: Reinforcement) {
        self.policy.set(outcome, reinforcement);
    }

    pub fn reward_wins(&mut self) {
        self.set_reinforcement(ResultType::Win, Reinforcement::Reward);
    }

    pub fn punish_wins(&mut self) {
        self.set_reinforcement(ResultType::Win, Reinforcement::Punish);
    }

    pub fn ignore_wins(&mut self) {
        self.set_reinforcement(ResultType::Win, Reinforcement::Ignore);
    }

    pub fn reward_losses(&mut self) {
        self.set_reinforcement(ResultType::Loss, Reinforcement::Reward);
    }

    pub fn punish_losses(&mut self) {
        self.set_reinforcement(ResultType::Loss, Reinforcement::Punish);
    }

    pub fn ignore_losses(&mut self) {
        self.set_reinforcement(ResultType::Loss, Reinforcement::Ignore);
    }

    pub fn reward_draws(&mut self) {
        self.set_reinforcement(ResultType::Draw, Reinforcement::Reward);
    }

    pub fn punish_draws(&mut self) {
        self.set_reinforcement(ResultType::Draw, Reinforcement::Punish);
    }

    pub fn ignore_draws(&mut self) {
        self.set_reinforcement(ResultType::Draw, Reinforcement::Ignore);
    }

    /// Creates an empty history sized by the configuration
    pub fn new_history(&self) -> MoveHistory {
        MoveHistory::with_capacity(self.config.history_length)
    }

    /// Saves learned weights
    ///
    /// Weights are not persisted yet; this always succeeds and does nothing.
    pub fn save(&self) -> Result<()> {
        log::debug!("save requested, weights are not persisted");
        Ok(())
    }

    /// Loads learned weights
    ///
    /// Weights are not persisted yet; this always succeeds and does nothing.
    pub fn load(&mut self) -> Result<()> {
        log::debug!("load requested, weights are not persisted");
        Ok(())
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn forest(&self) -> &SelectionForest {
        &self.forest
    }

    pub fn depth_selector(&self) -> &Selector<usize> {
        &self.depth_selector
    }

    pub fn mode_selector(&self) -> &Selector<AnalysisMode> {
        &self.mode_selector
    }

    pub fn get_statistics(&self) -> &PickerStatistics {
        &self.statistics
    }

    /// Returns a textual dump of the meta-selectors and the root
    pub fn describe(&self) -> String {
        format!(
            "depth: {}\nmode: {}\nroot: {}\nleaves: {}\n",
            self.depth_selector,
            self.mode_selector,
            self.forest.root(),
            self.forest.len()
        )
    }
}
