//! Criterion micro-benchmarks for the reveal engine across board tiers.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hypermines_core::{
    Game, GameConfig, LayoutGenerator, RandomLayoutGenerator, StartCell, iter_coords,
    iter_neighbors,
};
use smallvec::smallvec;

fn empty_game(shape: &[usize]) -> Game {
    Game::from_mine_coords(shape, &[]).unwrap()
}

/// Benchmark: flood fill a mine-free board from the origin, per size tier.
fn bench_flood_fill_tiers(c: &mut Criterion) {
    for (name, shape) in [
        ("flood_fill_8x8", &[8usize, 8][..]),
        ("flood_fill_64x64", &[64, 64][..]),
        ("flood_fill_16x16x16", &[16, 16, 16][..]),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut game = empty_game(shape);
                let origin = vec![0; shape.len()];
                let revealed = game.dig(&origin).unwrap();
                black_box(revealed);
            });
        });
    }
}

/// Benchmark: enumerate the neighborhood of every cell of a 16^3 board.
fn bench_neighborhood_16x16x16(c: &mut Criterion) {
    let shape = [16usize, 16, 16];

    c.bench_function("neighborhood_16x16x16", |b| {
        b.iter(|| {
            for coords in iter_coords(&shape) {
                let n = iter_neighbors(&coords, &shape).count();
                black_box(n);
            }
        });
    });
}

/// Benchmark: generate a 32x32 layout with a zero start cell.
fn bench_generate_32x32(c: &mut Criterion) {
    let config = GameConfig::new(&[32, 32], 128);

    c.bench_function("generate_32x32_128_mines", |b| {
        b.iter(|| {
            let generator = RandomLayoutGenerator::new(7, smallvec![16, 16], StartCell::AlwaysZero);
            let layout = generator.generate(&config);
            black_box(layout.mine_count());
        });
    });
}

criterion_group!(
    benches,
    bench_flood_fill_tiers,
    bench_neighborhood_16x16x16,
    bench_generate_32x32
);
criterion_main!(benches);
