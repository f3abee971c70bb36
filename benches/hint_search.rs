use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_mahjong::board::{self, Board};
use rust_mahjong::core::{Difficulty, DifficultyConfig, GameRng};

fn pyramid_board() -> Board {
    let config = DifficultyConfig::for_difficulty(Difficulty::Hard);
    board::generate(&config, &mut GameRng::new(12345), 64).unwrap()
}

fn bench_find_hint(c: &mut Criterion) {
    let board = pyramid_board();

    c.bench_function("find_hint_pyramid", |b| {
        b.iter(|| black_box(&board).find_hint())
    });
}

fn bench_free_tiles(c: &mut Criterion) {
    let board = pyramid_board();

    c.bench_function("free_tiles_pyramid", |b| {
        b.iter(|| black_box(&board).free_tiles())
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = DifficultyConfig::for_difficulty(Difficulty::Hard);
    let mut rng = GameRng::new(12345);

    c.bench_function("generate_pyramid", |b| {
        b.iter(|| board::generate(black_box(&config), &mut rng, 64))
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let board = pyramid_board();
    let mut rng = GameRng::new(99);

    c.bench_function("shuffle_pyramid", |b| {
        b.iter(|| board::shuffle(black_box(&board), &mut rng, 64))
    });
}

criterion_group!(
    benches,
    bench_find_hint,
    bench_free_tiles,
    bench_generate,
    bench_shuffle,
);
criterion_main!(benches);
