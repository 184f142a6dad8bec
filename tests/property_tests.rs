//! Property tests for engine invariants
//!
//! Generated seeds, grids and intent scripts check what must hold no matter
//! how the game is played:
//! - four rotations in one direction restore the matrix
//! - clearing rows keeps the row count, empties the top, and keeps the order
//!   of surviving rows
//! - nothing overlaps an empty grid
//! - score and line totals never decrease, and a stopped engine stays frozen
//! - engines sharing a configuration never influence each other

use proptest::prelude::*;
use twin_tetris::core::{
    canonical_shape, overlaps_locked, rotate_left, rotate_right, Engine, EngineConfig, Grid,
    Randomizer,
};
use twin_tetris::types::{Intent, Offset, PieceKind};

const INTENTS: [Intent; 6] = [
    Intent::MoveLeft,
    Intent::MoveRight,
    Intent::RotateLeft,
    Intent::RotateRight,
    Intent::SoftDrop,
    Intent::HardDrop,
];

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn randomizer_strategy() -> impl Strategy<Value = Randomizer> {
    any::<bool>().prop_map(|bag| if bag { Randomizer::Bag } else { Randomizer::Uniform })
}

/// (intent index, pressed) pairs applied one per update
fn script_strategy(max_len: usize) -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0..INTENTS.len(), any::<bool>()), 1..max_len)
}

proptest! {
    #[test]
    fn four_rotations_restore_every_kind(kind in kind_strategy(), turns in 0usize..12) {
        let start = *canonical_shape(kind);

        let mut left = start;
        let mut right = start;
        for _ in 0..turns {
            left = rotate_left(&left);
            right = rotate_right(&right);
        }
        for _ in 0..(4 - turns % 4) % 4 {
            left = rotate_left(&left);
            right = rotate_right(&right);
        }
        prop_assert_eq!(left, start);
        prop_assert_eq!(right, start);

        // Opposite rotations cancel
        prop_assert_eq!(rotate_left(&rotate_right(&start)), start);
    }

    #[test]
    fn clearing_rows_keeps_shape_and_survivor_order(
        rows in 4usize..24,
        cols in 4usize..12,
        pattern in prop::collection::vec(any::<u16>(), 24),
        full_mask in any::<u32>(),
    ) {
        let mut grid = Grid::new(rows, cols).unwrap();
        let tile = PieceKind::T.tile();
        for row in 0..rows {
            let full = full_mask & (1 << row) != 0;
            for col in 0..cols {
                if full || pattern[row] & (1 << col) != 0 {
                    grid.set(row as i32, col as i32, Some(tile));
                }
            }
        }

        let survivors: Vec<Vec<bool>> = (0..rows)
            .filter(|&row| !grid.is_row_full(row))
            .map(|row| grid.row(row).unwrap().iter().map(Option::is_some).collect())
            .collect();
        let expected_full = grid.full_rows();

        let cleared = grid.clear_full_rows();
        prop_assert_eq!(&cleared, &expected_full);
        prop_assert_eq!(grid.rows(), rows);
        prop_assert_eq!(grid.cols(), cols);
        prop_assert!(grid.full_rows().is_empty());

        for row in 0..cleared.len() {
            prop_assert!(grid.is_row_empty(row));
        }
        let after: Vec<Vec<bool>> = (cleared.len()..rows)
            .map(|row| grid.row(row).unwrap().iter().map(Option::is_some).collect())
            .collect();
        prop_assert_eq!(after, survivors);
    }

    #[test]
    fn nothing_overlaps_an_empty_grid(
        kind in kind_strategy(),
        row in -6i32..26,
        col in -6i32..16,
        dr in -2i32..3,
        dc in -2i32..3,
    ) {
        let grid = Grid::new(20, 10).unwrap();
        let shape = canonical_shape(kind);
        prop_assert!(!overlaps_locked(&grid, shape, Offset::new(row, col), (dr, dc)));
    }

    #[test]
    fn random_play_keeps_totals_monotonic(
        seed in any::<u32>(),
        randomizer in randomizer_strategy(),
        script in script_strategy(400),
    ) {
        let config = EngineConfig::default().with_seed(seed).with_randomizer(randomizer);
        let mut engine = Engine::with_config(config).unwrap();
        let mut frozen = None;

        for (i, pressed) in script {
            let (score, lines, locked) = (engine.score(), engine.lines(), engine.pieces_locked());
            engine.set_intent(INTENTS[i], pressed);
            engine.update();

            prop_assert!(engine.score() >= score);
            prop_assert!(engine.lines() >= lines);
            prop_assert!(engine.pieces_locked() >= locked);

            if let Some(snapshot) = &frozen {
                prop_assert_eq!(&engine.snapshot(), snapshot);
            } else if !engine.is_running() {
                frozen = Some(engine.snapshot());
            }
        }
    }

    #[test]
    fn engines_with_shared_config_stay_independent(
        seed in any::<u32>(),
        script in script_strategy(200),
    ) {
        let config = EngineConfig::default().with_seed(seed);
        let mut driven = Engine::with_config(config).unwrap();
        let mut idle = Engine::with_config(config).unwrap();
        let mut reference = Engine::with_config(config).unwrap();

        for (i, pressed) in script {
            driven.set_intent(INTENTS[i], pressed);
            driven.update();
            idle.update();
            reference.update();
        }
        prop_assert_eq!(idle.snapshot(), reference.snapshot());
    }
}
