use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ludo_engine::core::GameRng;
use ludo_engine::rules::movable_pieces;
use ludo_engine::{Color, FixedDice, GameConfig, GameState, Location, LudoGame, NullSink};

fn random_playout(seed: u64) -> Option<Color> {
    let mut game = LudoGame::with_parts(GameConfig::default().seed(seed), GameRng::new(seed), NullSink);
    let mut picker = GameRng::new(seed.wrapping_add(1));

    while game.winner().is_none() {
        let roll = game.request_roll().ok()?;
        if let Some(&piece) = picker.choose(&roll.movable) {
            game.request_move(roll.color, piece).ok()?;
        }
    }
    game.winner()
}

fn bench_movable_pieces(c: &mut Criterion) {
    let mut state = GameState::new(Color::Red);
    state.set_location(Color::Red, 0, Location::OnPath(48));
    state.set_location(Color::Red, 1, Location::OnHomeLane(2));
    state.set_location(Color::Red, 2, Location::Finished);

    c.bench_function("movable_pieces", |b| {
        b.iter(|| {
            for dice in 1..=6 {
                black_box(movable_pieces(black_box(&state), Color::Red, dice));
            }
        })
    });
}

fn bench_scripted_turns(c: &mut Criterion) {
    c.bench_function("scripted_turns_100", |b| {
        b.iter(|| {
            let mut game = LudoGame::with_parts(GameConfig::default(), FixedDice::new([6, 3, 5, 1]), NullSink);
            for _ in 0..100 {
                if let Ok(roll) = game.request_roll() {
                    if let Some(&piece) = roll.movable.first() {
                        let _ = game.request_move(roll.color, piece);
                    }
                }
            }
            black_box(game.active_color())
        })
    });
}

fn bench_random_playout(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            seed += 1;
            black_box(random_playout(seed))
        })
    });
}

criterion_group!(benches, bench_movable_pieces, bench_scripted_turns, bench_random_playout);
criterion_main!(benches);
