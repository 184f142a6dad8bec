//! Engine configuration and construction errors.

use thiserror::Error;

use crate::rng::Randomizer;
use crate::types::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_THRESHOLD, HARD_DROP_TICK_THRESHOLD, MAX_GRID_SIZE,
    PIECE_SIZE, SOFT_DROP_TICK_THRESHOLD,
};

/// Construction-time misuse of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid must be at least {min}x{min} to hold a piece matrix, got {rows}x{cols}")]
    GridTooSmall { rows: usize, cols: usize, min: usize },

    #[error("grid must be at most {max}x{max}, got {rows}x{cols}")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    #[error("{name} threshold must be at least 1")]
    ZeroThreshold { name: &'static str },
}

/// Everything needed to build an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Updates per gravity step with no drop intent held
    pub tick_threshold: u32,
    pub soft_drop_threshold: u32,
    pub hard_drop_threshold: u32,
    pub randomizer: Randomizer,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_threshold: DEFAULT_TICK_THRESHOLD,
            soft_drop_threshold: SOFT_DROP_TICK_THRESHOLD,
            hard_drop_threshold: HARD_DROP_TICK_THRESHOLD,
            randomizer: Randomizer::Uniform,
            seed: 1,
        }
    }
}

impl EngineConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_threshold(mut self, tick_threshold: u32) -> Self {
        self.tick_threshold = tick_threshold;
        self
    }

    pub fn with_drop_thresholds(mut self, soft: u32, hard: u32) -> Self {
        self.soft_drop_threshold = soft;
        self.hard_drop_threshold = hard;
        self
    }

    pub fn with_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject dimensions and cadences the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.rows, self.cols)?;

        for (name, value) in [
            ("gravity", self.tick_threshold),
            ("soft drop", self.soft_drop_threshold),
            ("hard drop", self.hard_drop_threshold),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroThreshold { name });
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyGrid { rows, cols });
    }
    if rows < PIECE_SIZE || cols < PIECE_SIZE {
        return Err(ConfigError::GridTooSmall {
            rows,
            cols,
            min: PIECE_SIZE,
        });
    }
    if rows > MAX_GRID_SIZE || cols > MAX_GRID_SIZE {
        return Err(ConfigError::GridTooLarge {
            rows,
            cols,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let config = EngineConfig::default().with_dimensions(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 10 })
        );
    }

    #[test]
    fn grid_narrower_than_a_piece_is_rejected() {
        let config = EngineConfig::default().with_dimensions(20, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall { cols: 3, .. })
        ));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let config = EngineConfig::default().with_dimensions(20, 33_000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooLarge {
                rows: 20,
                cols: 33_000,
                max: MAX_GRID_SIZE,
            })
        );
        let largest = EngineConfig::default().with_dimensions(MAX_GRID_SIZE, MAX_GRID_SIZE);
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let config = EngineConfig::default().with_drop_thresholds(0, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroThreshold { name: "soft drop" })
        );
    }

    #[test]
    fn error_messages_are_readable() {
        let err = ConfigError::EmptyGrid { rows: 0, cols: 0 };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x0");
    }
}
