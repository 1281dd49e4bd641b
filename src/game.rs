//! Move, outcome and analysis-mode types for the game.
//!
//! Moves come in two families that share one enumeration: absolute moves
//! (rock, paper, scissors) and relative moves (hold, ascend, descend) that
//! describe how a player's move changed from one round to the next. Both
//! families map onto the same `0..3` index space, which is what the
//! selection forest uses to key its leaves.

use std::fmt;

use crate::record::Round;

/// Trait for the closed enumerations that index into the selection forest
///
/// Mirrors how actions expose a stable identifier: every value maps to a
/// small integer in `0..Self::COUNT`.
pub trait Indexed: Copy {
    /// Number of distinct indices produced by this type
    const COUNT: usize;

    /// Returns the index of this value
    fn index(&self) -> usize;
}

/// A move in a single round, either absolute or relative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveType {
    Rock,
    Paper,
    Scissors,
    /// paper -> paper -> paper
    Hold,
    /// paper -> scissors -> rock -> paper
    Ascend,
    /// paper -> rock -> scissors -> paper
    Descend,
}

/// The three absolute moves, in index order
pub const ABSOLUTE_MOVES: [MoveType; 3] = [MoveType::Rock, MoveType::Paper, MoveType::Scissors];

/// The three relative moves, in index order
pub const RELATIVE_MOVES: [MoveType; 3] = [MoveType::Hold, MoveType::Ascend, MoveType::Descend];

impl MoveType {
    /// Returns true for rock, paper and scissors
    pub fn is_absolute(&self) -> bool {
        matches!(self, MoveType::Rock | MoveType::Paper | MoveType::Scissors)
    }

    /// Returns true for hold, ascend and descend
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns the absolute move that beats this one
    ///
    /// Relative moves have no opponent to beat and return `None`.
    pub fn beaten_by(&self) -> Option<MoveType> {
        self.is_absolute()
            .then(|| ABSOLUTE_MOVES[(self.index() + 1) % 3])
    }

    /// Returns true if this absolute move beats `other`
    pub fn beats(&self, other: MoveType) -> bool {
        other.beaten_by() == Some(*self)
    }

    /// Describes how this absolute move relates to the `previous` one
    ///
    /// Returns `None` unless both moves are absolute.
    pub fn relative_to(&self, previous: MoveType) -> Option<MoveType> {
        if !self.is_absolute() || !previous.is_absolute() {
            return None;
        }
        let step = (self.index() + 3 - previous.index()) % 3;
        Some(RELATIVE_MOVES[step])
    }

    /// Applies a relative move to this absolute move
    ///
    /// `Rock.shift(Ascend)` is `Paper`. Returns `None` unless `self` is
    /// absolute and `relative` is relative.
    pub fn shift(&self, relative: MoveType) -> Option<MoveType> {
        if !self.is_absolute() || !relative.is_relative() {
            return None;
        }
        Some(ABSOLUTE_MOVES[(self.index() + relative.index()) % 3])
    }

    /// Returns the absolute move that produces `outcome` against `against`
    pub fn achieving(outcome: ResultType, against: MoveType) -> Option<MoveType> {
        if !against.is_absolute() {
            return None;
        }
        let offset = match outcome {
            ResultType::Draw => 0,
            ResultType::Win => 1,
            ResultType::Loss => 2,
        };
        Some(ABSOLUTE_MOVES[(against.index() + offset) % 3])
    }
}

impl Indexed for MoveType {
    const COUNT: usize = 3;

    fn index(&self) -> usize {
        match self {
            MoveType::Rock | MoveType::Hold => 0,
            MoveType::Paper | MoveType::Ascend => 1,
            MoveType::Scissors | MoveType::Descend => 2,
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Outcome of a round from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultType {
    Win,
    Loss,
    Draw,
}

/// All outcomes, in index order
pub const RESULTS: [ResultType; 3] = [ResultType::Win, ResultType::Loss, ResultType::Draw];

impl ResultType {
    /// Scores `player` against `opponent`
    ///
    /// Returns `None` if either move is relative.
    pub fn of(player: MoveType, opponent: MoveType) -> Option<ResultType> {
        if !player.is_absolute() || !opponent.is_absolute() {
            return None;
        }
        Some(if player == opponent {
            ResultType::Draw
        } else if player.beats(opponent) {
            ResultType::Win
        } else {
            ResultType::Loss
        })
    }
}

impl Indexed for ResultType {
    const COUNT: usize = 3;

    fn index(&self) -> usize {
        match self {
            ResultType::Win => 0,
            ResultType::Loss => 1,
            ResultType::Draw => 2,
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which field of a round is consulted when walking the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnalysisMode {
    PlayerAbsolute,
    PlayerRelative,
    OpponentAbsolute,
    OpponentRelative,
    Result,
}

/// All analysis modes, in index order
pub const ANALYSIS_MODES: [AnalysisMode; 5] = [
    AnalysisMode::PlayerAbsolute,
    AnalysisMode::PlayerRelative,
    AnalysisMode::OpponentAbsolute,
    AnalysisMode::OpponentRelative,
    AnalysisMode::Result,
];

impl AnalysisMode {
    /// Reads the index of the field this mode designates
    pub fn index_of(&self, round: &Round) -> usize {
        match self {
            AnalysisMode::PlayerAbsolute => round.player_absolute().index(),
            AnalysisMode::PlayerRelative => round.player_relative().index(),
            AnalysisMode::OpponentAbsolute => round.opponent_absolute().index(),
            AnalysisMode::OpponentRelative => round.opponent_relative().index(),
            AnalysisMode::Result => round.result().index(),
        }
    }

    /// The values a leaf under this mode picks from
    pub fn candidates(&self) -> [Choice; 3] {
        match self {
            AnalysisMode::PlayerAbsolute | AnalysisMode::OpponentAbsolute => {
                ABSOLUTE_MOVES.map(Choice::Move)
            }
            AnalysisMode::PlayerRelative | AnalysisMode::OpponentRelative => {
                RELATIVE_MOVES.map(Choice::Move)
            }
            AnalysisMode::Result => RESULTS.map(Choice::Outcome),
        }
    }
}

impl Indexed for AnalysisMode {
    const COUNT: usize = 5;

    fn index(&self) -> usize {
        match self {
            AnalysisMode::PlayerAbsolute => 0,
            AnalysisMode::PlayerRelative => 1,
            AnalysisMode::OpponentAbsolute => 2,
            AnalysisMode::OpponentRelative => 3,
            AnalysisMode::Result => 4,
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The value held by a leaf category
///
/// Result-mode leaves pick an outcome label rather than a move, so the leaf
/// value type carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Move(MoveType),
    Outcome(ResultType),
}

impl Choice {
    /// Returns the move if this choice is one
    pub fn as_move(&self) -> Option<MoveType> {
        match self {
            Choice::Move(m) => Some(*m),
            Choice::Outcome(_) => None,
        }
    }

    /// Returns the outcome label if this choice is one
    pub fn as_outcome(&self) -> Option<ResultType> {
        match self {
            Choice::Outcome(r) => Some(*r),
            Choice::Move(_) => None,
        }
    }

    /// Turns this choice into a concrete absolute move to play
    ///
    /// Absolute moves are played as-is. Relative moves shift the player's
    /// move from `last`, and outcome labels aim for that outcome against the
    /// opponent's move from `last`. Returns `None` when a relative move or
    /// outcome label has no previous round to work from.
    pub fn resolve(&self, last: Option<&Round>) -> Option<MoveType> {
        match self {
            Choice::Move(m) if m.is_absolute() => Some(*m),
            Choice::Move(m) => last.and_then(|r| r.player_absolute().shift(*m)),
            Choice::Outcome(outcome) => {
                last.and_then(|r| MoveType::achieving(*outcome, r.opponent_absolute()))
            }
        }
    }
}

impl From<MoveType> for Choice {
    fn from(m: MoveType) -> Self {
        Choice::Move(m)
    }
}

impl From<ResultType> for Choice {
    fn from(r: ResultType) -> Self {
        Choice::Outcome(r)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Move(m) => write!(f, "{}", m),
            Choice::Outcome(r) => write!(f, "{}", r),
        }
    }
}
