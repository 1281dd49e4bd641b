#[macro_use]
extern crate criterion;

use adaptive_rps::{MoveHistory, MovePicker, MoveType, PickerConfig, Round};
use criterion::{black_box, BenchmarkId, Criterion};
use std::time::Duration;

// Plays `rounds` rounds against an opponent that cycles through the moves
fn play(picker: &mut MovePicker, rounds: usize) {
    let mut history = picker.new_history();
    for i in 0..rounds {
        let decision = picker.decide_move(&history).unwrap();
        let mine = decision.play().unwrap_or(MoveType::Rock);
        let theirs = [MoveType::Rock, MoveType::Paper, MoveType::Scissors][i % 3];
        let round = Round::from_play(mine, theirs, history.latest()).unwrap();
        picker.feedback(&decision, round.result()).unwrap();
        history.push(round);
    }
}

fn bench_move_picker(c: &mut Criterion) {
    let _ = env_logger::builder().try_init();
    let mut group = c.benchmark_group("move_picker");
    group.measurement_time(Duration::from_secs(10));

    // Forest construction at different depths
    for depth in [1usize, 3, 5].iter() {
        let config = PickerConfig::default()
            .with_max_depth(*depth)
            .with_history_length(*depth);
        group.bench_with_input(BenchmarkId::new("build/depth", depth), depth, |b, &_| {
            b.iter(|| black_box(MovePicker::seeded(config.clone(), 0).unwrap()))
        });
    }

    // A single decision against a full history
    {
        let mut picker = MovePicker::seeded(PickerConfig::default(), 1).unwrap();
        let mut history = MoveHistory::new();
        let mut previous: Option<Round> = None;
        for theirs in [MoveType::Rock, MoveType::Paper, MoveType::Scissors] {
            let round = Round::from_play(MoveType::Paper, theirs, previous.as_ref()).unwrap();
            history.push(round);
            previous = Some(round);
        }

        group.bench_function("decide_move", |b| {
            b.iter(|| black_box(picker.decide_move(&history).unwrap()))
        });
    }

    // Full decide + feedback loops
    for &rounds in &[100usize, 1000] {
        group.bench_with_input(BenchmarkId::new("rounds", rounds), &rounds, |b, &n| {
            b.iter(|| {
                let mut picker = MovePicker::seeded(PickerConfig::default(), 2).unwrap();
                play(&mut picker, n);
                black_box(picker.get_statistics().decisions)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_move_picker);
criterion_main!(benches);
