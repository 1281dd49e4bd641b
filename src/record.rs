//! Immutable records describing played rounds and the decisions made for them.

use crate::game::{AnalysisMode, Choice, MoveType, ResultType};
use crate::history::MoveHistory;

/// The moves chosen by both players in one round, plus its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Round {
    player_absolute: MoveType,
    player_relative: MoveType,
    opponent_absolute: MoveType,
    opponent_relative: MoveType,
    result: ResultType,
}

impl Round {
    /// Creates a round from its five fields
    pub fn new(
        player_absolute: MoveType,
        player_relative: MoveType,
        opponent_absolute: MoveType,
        opponent_relative: MoveType,
        result: ResultType,
    ) -> Self {
        Round {
            player_absolute,
            player_relative,
            opponent_absolute,
            opponent_relative,
            result,
        }
    }

    /// Builds a round from the two absolute moves just played
    ///
    /// Relative fields are derived from `previous`; on the first round of a
    /// game both count as `Hold`. Returns `None` if either move is relative.
    pub fn from_play(player: MoveType, opponent: MoveType, previous: Option<&Round>) -> Option<Self> {
        let result = ResultType::of(player, opponent)?;
        let (player_relative, opponent_relative) = match previous {
            Some(prev) => (
                player.relative_to(prev.player_absolute)?,
                opponent.relative_to(prev.opponent_absolute)?,
            ),
            None => (MoveType::Hold, MoveType::Hold),
        };
        Some(Round::new(
            player,
            player_relative,
            opponent,
            opponent_relative,
            result,
        ))
    }

    pub fn player_absolute(&self) -> MoveType {
        self.player_absolute
    }

    pub fn player_relative(&self) -> MoveType {
        self.player_relative
    }

    pub fn opponent_absolute(&self) -> MoveType {
        self.opponent_absolute
    }

    pub fn opponent_relative(&self) -> MoveType {
        self.opponent_relative
    }

    pub fn result(&self) -> ResultType {
        self.result
    }
}

/// How a decision was resolved: lookback depth and analysis mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionMethod {
    depth: usize,
    mode: AnalysisMode,
}

impl SelectionMethod {
    pub fn new(depth: usize, mode: AnalysisMode) -> Self {
        SelectionMethod { depth, mode }
    }

    /// Number of previous rounds analyzed
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Field of each round that was analyzed
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }
}

/// A picked choice along with the history and method that produced it
///
/// The history is a snapshot taken when the decision was made, so feedback
/// always lands on the same leaf no matter what happens to the live history
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    picked: Choice,
    assumed_history: MoveHistory,
    selection_method: SelectionMethod,
}

impl Decision {
    pub fn new(picked: Choice, assumed_history: MoveHistory, selection_method: SelectionMethod) -> Self {
        Decision {
            picked,
            assumed_history,
            selection_method,
        }
    }

    /// The value drawn from the resolved leaf
    pub fn picked(&self) -> Choice {
        self.picked
    }

    /// The move to actually play, see [`Choice::resolve`]
    pub fn play(&self) -> Option<MoveType> {
        self.picked.resolve(self.assumed_history.latest())
    }

    pub fn assumed_history(&self) -> &MoveHistory {
        &self.assumed_history
    }

    pub fn selection_method(&self) -> SelectionMethod {
        self.selection_method
    }
}
