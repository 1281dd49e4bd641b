//! # adaptive-rps
//!
//! A self-adjusting weighted-random move picker for rock-paper-scissors style
//! games.
//!
//! Every move is drawn from a [`Selector`]: a list of values with integer
//! weights. Which selector is used depends on the recent history of the game.
//! The picker first draws how many rounds to look back (0 to 3 by default)
//! and which field of each round to look at (the player's or opponent's
//! absolute or relative move, or the round's result). The indices read from
//! those rounds address one leaf of a [`SelectionForest`], and the move is
//! drawn from that leaf.
//!
//! After each round, [`MovePicker::feedback`] shifts weight towards or away
//! from what was picked, depending on the outcome.
//!
//! ## Basic Usage
//!
//! ```
//! use adaptive_rps::{MovePicker, MoveType, PickerConfig, ResultType, Round};
//!
//! fn main() -> Result<(), adaptive_rps::PickerError> {
//!     let mut picker = MovePicker::seeded(PickerConfig::default(), 7)?;
//!     let mut history = picker.new_history();
//!
//!     let decision = picker.decide_move(&history)?;
//!     let mine = decision.play().unwrap_or(MoveType::Rock);
//!
//!     // The opponent threw paper
//!     let round = Round::from_play(mine, MoveType::Paper, history.latest())
//!         .expect("both moves are absolute");
//!     picker.feedback(&decision, round.result())?;
//!     history.push(round);
//!
//!     println!("{}", picker.get_statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Reinforcement
//!
//! By default wins are rewarded, losses punished and draws ignored. Each
//! outcome can be switched independently:
//!
//! ```
//! use adaptive_rps::{MovePicker, PickerConfig, Reinforcement, ResultType};
//!
//! let mut picker = MovePicker::seeded(PickerConfig::default(), 1).unwrap();
//! picker.punish_draws();
//! assert_eq!(picker.reinforcement(ResultType::Draw), Reinforcement::Punish);
//! ```

pub mod config;
pub mod forest;
pub mod game;
pub mod history;
pub mod picker;
pub mod policy;
pub mod record;
pub mod selector;
pub mod stats;
pub mod utils;

pub use config::PickerConfig;
pub use forest::{LeafKey, SelectionForest};
pub use game::{AnalysisMode, Choice, Indexed, MoveType, ResultType};
pub use history::MoveHistory;
pub use picker::MovePicker;
pub use policy::{OutcomePolicy, Reinforcement};
pub use record::{Decision, Round, SelectionMethod};
pub use selector::{Category, Selector};
pub use stats::PickerStatistics;

/// Error types for the move picker
#[derive(thiserror::Error, Debug)]
pub enum PickerError {
    /// Pick attempted on a selector with no categories
    #[error("Selector has no values to pick from")]
    EmptySelector,

    /// Pick attempted on a selector whose weights have all drained to zero
    #[error("Selector has no weight to pick with")]
    ZeroTotalWeight,

    /// Category added with a zero weight, or total weight overflowed
    #[error("Category weight must be positive and fit the selector total")]
    InvalidWeight,

    /// The forest has no selector for a key it should contain
    #[error("No leaf selector for {0}")]
    MissingLeaf(LeafKey),

    /// History holds fewer rounds than the lookback depth
    #[error("History too short: depth {depth} but only {available} rounds available")]
    HistoryTooShort { depth: usize, available: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for move picker operations
pub type Result<T> = std::result::Result<T, PickerError>;
