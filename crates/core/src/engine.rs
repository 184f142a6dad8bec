//! Engine module - one playing field driven by fixed update steps
//!
//! The engine owns a grid, the active and next pieces, the active piece's
//! offset, the intent flags and a tick counter. A controller sets intents; the
//! driver calls [`Engine::update`] once per step. Each update runs its
//! sub-phases in a fixed order: lateral shift, rotation, gravity.
//!
//! Once a freshly spawned piece cannot be placed the engine stops for good and
//! every later update is a no-op.

use tracing::{debug, info};

use crate::collision::{exceeds_bottom, is_legal, overlaps_locked};
use crate::config::{ConfigError, EngineConfig};
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::{PieceGenerator, PieceSource};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, EngineSnapshot, NextSnapshot};
use crate::types::{Intent, Offset};

/// Intent flags currently set on an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    /// Stays set until a counter-clockwise turn succeeds
    pub rotate_left: bool,
    /// Stays set until a clockwise turn succeeds
    pub rotate_right: bool,
    pub soft_drop: bool,
    pub hard_drop: bool,
}

/// Outcome of one lock, kept until taken
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Rows removed, top to bottom, as indexed before the clear
    pub cleared_rows: Vec<usize>,
    pub score_delta: u32,
    /// The piece spawned after this lock could not be placed
    pub game_over: bool,
}

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    active: Piece,
    next: Piece,
    offset: Offset,
    tick_counter: u32,
    tick_threshold: u32,
    intents: Intents,
    running: bool,
    /// Set only inside `lock_active`, while a lock and its line clear are
    /// resolved; every public call observes it as false
    locking: bool,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    last_event: Option<LockEvent>,
    generator: PieceGenerator,
}

impl Engine {
    /// Engine on an empty `rows x cols` grid with default cadence and policy
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::with_config(EngineConfig::default().with_dimensions(rows, cols))
    }

    /// Engine using the configured randomizer and seed
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::with_source(config, config.randomizer.source(config.seed))
    }

    /// Engine drawing its pieces from `source`; the config's randomizer is ignored
    pub fn with_source(
        config: EngineConfig,
        source: Box<dyn PieceSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        let mut generator = PieceGenerator::new(source);
        let active = generator.generate();
        let next = generator.generate();

        debug!(
            rows = config.rows,
            cols = config.cols,
            active = active.kind().as_str(),
            next = next.kind().as_str(),
            "engine created"
        );

        Ok(Self {
            config,
            grid,
            active,
            next,
            offset: Offset::spawn(config.cols),
            tick_counter: 0,
            tick_threshold: config.tick_threshold,
            intents: Intents::default(),
            running: true,
            locking: false,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            last_event: None,
            generator,
        })
    }

    /// Advance one fixed step
    pub fn update(&mut self) {
        if !self.running {
            return;
        }

        self.tick_counter += 1;

        // Never set here: a lock starts and finishes inside one gravity step.
        if !self.locking {
            self.apply_lateral();
            self.apply_rotation();
        }

        if self.tick_counter >= self.tick_threshold {
            self.tick_counter = 0;
            self.apply_gravity();
        }
    }

    /// Set or clear an intent
    ///
    /// Drop intents take effect on the gravity cadence immediately: hard drop
    /// wins over soft drop, and releasing both restores the configured default.
    pub fn set_intent(&mut self, intent: Intent, active: bool) {
        match intent {
            Intent::MoveLeft => self.intents.move_left = active,
            Intent::MoveRight => self.intents.move_right = active,
            Intent::RotateLeft => self.intents.rotate_left = active,
            Intent::RotateRight => self.intents.rotate_right = active,
            Intent::SoftDrop => {
                self.intents.soft_drop = active;
                self.recompute_threshold();
            }
            Intent::HardDrop => {
                self.intents.hard_drop = active;
                self.recompute_threshold();
            }
        }
    }

    fn recompute_threshold(&mut self) {
        self.tick_threshold = if self.intents.hard_drop {
            self.config.hard_drop_threshold
        } else if self.intents.soft_drop {
            self.config.soft_drop_threshold
        } else {
            self.config.tick_threshold
        };
    }

    /// At most one column per update; left wins when both are held
    fn apply_lateral(&mut self) {
        let delta = if self.intents.move_left {
            -1
        } else if self.intents.move_right {
            1
        } else {
            return;
        };

        if is_legal(&self.grid, self.active.shape(), self.offset, (0, delta)) {
            self.offset = self.offset.shifted(0, delta);
        }
    }

    /// A rejected rotation stays pending and is retried next update
    fn apply_rotation(&mut self) {
        if self.intents.rotate_left {
            let candidate = self.active.rotated_left();
            if is_legal(&self.grid, &candidate, self.offset, (0, 0)) {
                self.active.set_shape(candidate);
                self.intents.rotate_left = false;
            }
        }

        if self.intents.rotate_right {
            let candidate = self.active.rotated_right();
            if is_legal(&self.grid, &candidate, self.offset, (0, 0)) {
                self.active.set_shape(candidate);
                self.intents.rotate_right = false;
            }
        }
    }

    fn apply_gravity(&mut self) {
        let shape = self.active.shape();
        let blocked = exceeds_bottom(&self.grid, shape, self.offset, 1)
            || overlaps_locked(&self.grid, shape, self.offset, (1, 0));

        if blocked {
            self.lock_active();
        } else {
            self.offset = self.offset.shifted(1, 0);
        }
    }

    /// Burn the active piece in, promote the next one, clear lines, check spawn
    fn lock_active(&mut self) {
        self.locking = true;

        self.grid
            .lock(self.active.shape(), self.offset, self.active.tile());
        self.pieces_locked += 1;
        debug!(
            kind = self.active.kind().as_str(),
            row = self.offset.row,
            col = self.offset.col,
            "piece locked"
        );

        let fresh = self.generator.generate();
        self.active = std::mem::replace(&mut self.next, fresh);
        self.offset = Offset::spawn(self.grid.cols());

        let cleared_rows = self.grid.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;
        let score_delta = line_clear_score(cleared_rows.len());
        if lines_cleared > 0 {
            self.lines += lines_cleared;
            self.score = self.score.saturating_add(score_delta);
            debug!(lines = lines_cleared, rows = ?cleared_rows, score = self.score, "lines cleared");
        }

        // Checked after the clear so a clear that frees the spawn area saves the game
        let game_over = !is_legal(&self.grid, self.active.shape(), self.offset, (0, 0));
        if game_over {
            self.running = false;
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_locked,
                "game over"
            );
        }

        self.last_event = Some(LockEvent {
            lines_cleared,
            cleared_rows,
            score_delta,
            game_over,
        });

        self.locking = false;
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Always false between calls; a lock resolves within one update
    pub fn is_locking(&self) -> bool {
        self.locking
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn tick_threshold(&self) -> u32 {
        self.tick_threshold
    }

    pub fn intents(&self) -> Intents {
        self.intents
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            cells: self.grid.cells().to_vec(),
            active: ActiveSnapshot {
                kind: self.active.kind(),
                shape: *self.active.shape(),
                offset: self.offset,
            },
            next: NextSnapshot {
                kind: self.next.kind(),
                shape: *self.next.shape(),
            },
            running: self.running,
            score: self.score,
            lines: self.lines,
            pieces_locked: self.pieces_locked,
        }
    }
}
