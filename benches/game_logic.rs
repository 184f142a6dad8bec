use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twin_tetris::core::{
    canonical_shape, is_legal, rotate_right, Engine, EngineConfig, Grid, PieceGenerator,
    Randomizer,
};
use twin_tetris::types::{Intent, Offset, PieceKind};

fn bench_update(c: &mut Criterion) {
    let mut engine = Engine::with_config(EngineConfig::default().with_seed(12345)).unwrap();

    c.bench_function("engine_update", |b| {
        b.iter(|| {
            if !engine.is_running() {
                engine = Engine::with_config(EngineConfig::default().with_seed(12345)).unwrap();
            }
            engine.update();
        })
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let config = EngineConfig::default()
                .with_seed(black_box(12345))
                .with_randomizer(Randomizer::Bag);
            let mut engine = Engine::with_config(config).unwrap();
            engine.set_intent(Intent::HardDrop, true);
            while engine.is_running() {
                engine.update();
            }
            engine.pieces_locked()
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let tile = PieceKind::I.tile();
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10).unwrap();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    grid.set(row, col, Some(tile));
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut generator = PieceGenerator::with_randomizer(Randomizer::Bag, 12345);

    c.bench_function("generate_piece", |b| b.iter(|| generator.generate()));
}

fn bench_collision(c: &mut Criterion) {
    let grid = Grid::new(20, 10).unwrap();
    let shape = rotate_right(canonical_shape(PieceKind::T));

    c.bench_function("is_legal", |b| {
        b.iter(|| is_legal(&grid, black_box(&shape), Offset::new(10, 3), (1, 0)))
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_hard_drop_game,
    bench_line_clear,
    bench_generate,
    bench_collision
);
criterion_main!(benches);
