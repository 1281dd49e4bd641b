use adaptive_rps::game::{ABSOLUTE_MOVES, RELATIVE_MOVES};
use adaptive_rps::{AnalysisMode, Choice, Indexed, MoveType, ResultType, Round};

#[test]
fn test_move_families_share_index_space() {
    for (abs, rel) in ABSOLUTE_MOVES.iter().zip(RELATIVE_MOVES.iter()) {
        assert_eq!(abs.index(), rel.index());
        assert!(abs.is_absolute());
        assert!(rel.is_relative());
    }
    assert_eq!(ResultType::Win.index(), 0);
    assert_eq!(ResultType::Loss.index(), 1);
    assert_eq!(ResultType::Draw.index(), 2);
    assert_eq!(AnalysisMode::Result.index(), 4);
}

#[test]
fn test_scoring() {
    assert_eq!(
        ResultType::of(MoveType::Paper, MoveType::Rock),
        Some(ResultType::Win)
    );
    assert_eq!(
        ResultType::of(MoveType::Rock, MoveType::Paper),
        Some(ResultType::Loss)
    );
    assert_eq!(
        ResultType::of(MoveType::Scissors, MoveType::Scissors),
        Some(ResultType::Draw)
    );
    assert_eq!(
        ResultType::of(MoveType::Rock, MoveType::Scissors),
        Some(ResultType::Win)
    );
    assert_eq!(ResultType::of(MoveType::Hold, MoveType::Rock), None);
}

#[test]
fn test_relative_moves() {
    // paper -> scissors -> rock -> paper
    assert_eq!(
        MoveType::Scissors.relative_to(MoveType::Paper),
        Some(MoveType::Ascend)
    );
    assert_eq!(
        MoveType::Rock.relative_to(MoveType::Scissors),
        Some(MoveType::Ascend)
    );
    // paper -> rock -> scissors -> paper
    assert_eq!(
        MoveType::Rock.relative_to(MoveType::Paper),
        Some(MoveType::Descend)
    );
    assert_eq!(
        MoveType::Paper.relative_to(MoveType::Paper),
        Some(MoveType::Hold)
    );

    for prev in ABSOLUTE_MOVES {
        for next in ABSOLUTE_MOVES {
            let rel = next.relative_to(prev).unwrap();
            assert_eq!(prev.shift(rel), Some(next));
        }
    }
}

#[test]
fn test_achieving_outcomes() {
    for against in ABSOLUTE_MOVES {
        for outcome in [ResultType::Win, ResultType::Loss, ResultType::Draw] {
            let mine = MoveType::achieving(outcome, against).unwrap();
            assert_eq!(ResultType::of(mine, against), Some(outcome));
        }
    }
}

#[test]
fn test_round_from_play_derives_relative_fields() {
    let first = Round::from_play(MoveType::Paper, MoveType::Rock, None).unwrap();
    assert_eq!(first.player_relative(), MoveType::Hold);
    assert_eq!(first.opponent_relative(), MoveType::Hold);
    assert_eq!(first.result(), ResultType::Win);

    let second = Round::from_play(MoveType::Scissors, MoveType::Scissors, Some(&first)).unwrap();
    assert_eq!(second.player_relative(), MoveType::Ascend);
    assert_eq!(second.opponent_relative(), MoveType::Descend);
    assert_eq!(second.result(), ResultType::Draw);

    assert!(Round::from_play(MoveType::Hold, MoveType::Rock, None).is_none());
}

#[test]
fn test_mode_reads_designated_field() {
    let round = Round::new(
        MoveType::Paper,
        MoveType::Descend,
        MoveType::Rock,
        MoveType::Ascend,
        ResultType::Win,
    );
    assert_eq!(AnalysisMode::PlayerAbsolute.index_of(&round), 1);
    assert_eq!(AnalysisMode::PlayerRelative.index_of(&round), 2);
    assert_eq!(AnalysisMode::OpponentAbsolute.index_of(&round), 0);
    assert_eq!(AnalysisMode::OpponentRelative.index_of(&round), 1);
    assert_eq!(AnalysisMode::Result.index_of(&round), 0);
}

#[test]
fn test_mode_candidates_match_leaf_value_type() {
    assert!(AnalysisMode::PlayerAbsolute
        .candidates()
        .iter()
        .all(|c| c.as_move().map_or(false, |m| m.is_absolute())));
    assert!(AnalysisMode::OpponentRelative
        .candidates()
        .iter()
        .all(|c| c.as_move().map_or(false, |m| m.is_relative())));
    assert_eq!(
        AnalysisMode::Result.candidates(),
        [
            Choice::Outcome(ResultType::Win),
            Choice::Outcome(ResultType::Loss),
            Choice::Outcome(ResultType::Draw),
        ]
    );
}

#[test]
fn test_choice_resolves_to_absolute_move() {
    let last = Round::from_play(MoveType::Rock, MoveType::Scissors, None).unwrap();

    assert_eq!(
        Choice::Move(MoveType::Paper).resolve(None),
        Some(MoveType::Paper)
    );
    assert_eq!(
        Choice::Move(MoveType::Ascend).resolve(Some(&last)),
        Some(MoveType::Paper)
    );
    assert_eq!(Choice::Move(MoveType::Hold).resolve(None), None);
    // beat the opponent's last scissors
    assert_eq!(
        Choice::Outcome(ResultType::Win).resolve(Some(&last)),
        Some(MoveType::Rock)
    );
    assert_eq!(Choice::Outcome(ResultType::Loss).resolve(None), None);
}
