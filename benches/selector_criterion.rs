use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use makruk_engine::engines::engine_selector::SelectorEngine;
use makruk_engine::engines::engine_trait::Engine;
use makruk_engine::game_state::game_state::GameState;
use makruk_engine::move_generation::legal_move_generator::{
    generate_candidates, legal_destinations,
};
use makruk_engine::game_state::chess_types::BoardLocation;

fn bench_candidate_enumeration(c: &mut Criterion) {
    let game = GameState::new_game();

    c.bench_function("generate_candidates/startpos", |b| {
        b.iter(|| generate_candidates(black_box(&game)))
    });

    c.bench_function("legal_destinations/white_ruea_a1", |b| {
        b.iter(|| legal_destinations(black_box(&game), BoardLocation::new(7, 0)))
    });
}

fn bench_selector_levels(c: &mut Criterion) {
    let game = GameState::new_game();
    let mut group = c.benchmark_group("selector_choose_move");

    for level in 1..=4u8 {
        group.bench_with_input(BenchmarkId::new("startpos", level), &level, |b, &level| {
            let mut engine = SelectorEngine::from_seed(level, 0);
            b.iter(|| {
                engine
                    .choose_move(black_box(&game))
                    .expect("selection should succeed")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_candidate_enumeration, bench_selector_levels);
criterion_main!(benches);
