//! Terminal Twin Tetris runner (default binary).
//!
//! Renders the top screen of the state stack, polls crossterm for key events
//! until the next fixed step is due, then advances the top screen one step.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use twin_tetris::core::{EngineConfig, Randomizer};
use twin_tetris::session::{EventLog, Game, GameMode, Screen, StateStack, Transition};
use twin_tetris::term::{BoardView, FrameBuffer, MenuView, TerminalRenderer, Viewport};
use twin_tetris::types::{DEFAULT_COLS, DEFAULT_ROWS, TICK_MS};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum ModeArg {
    Single,
    Two,
}

impl From<ModeArg> for GameMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Single => GameMode::SinglePlayer,
            ModeArg::Two => GameMode::TwoPlayer,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum RandomizerArg {
    Uniform,
    Bag,
}

impl From<RandomizerArg> for Randomizer {
    fn from(value: RandomizerArg) -> Self {
        match value {
            RandomizerArg::Uniform => Randomizer::Uniform,
            RandomizerArg::Bag => Randomizer::Bag,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "twin-tetris", about = "Falling-block puzzle for one or two players")]
struct Cli {
    #[arg(long, value_enum, help = "Start a game right away instead of showing the menu")]
    mode: Option<ModeArg>,

    #[arg(long, default_value_t = DEFAULT_ROWS, help = "Grid rows")]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_COLS, help = "Grid columns")]
    cols: usize,

    #[arg(long, help = "Piece generator seed (defaults to the clock)")]
    seed: Option<u32>,

    #[arg(long, default_value_t = TICK_MS as u64, help = "Milliseconds per update step")]
    tick_ms: u64,

    #[arg(long, value_enum, default_value = "uniform", help = "Piece generation policy")]
    randomizer: RandomizerArg,

    #[arg(long, help = "Write logs to this file (logs are discarded otherwise)")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (default INFO, -v = DEBUG, -vv = TRACE)")]
    verbose: u8,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_dimensions(self.rows, self.cols)
            .with_randomizer(self.randomizer.into())
            .with_seed(self.seed.unwrap_or_else(clock_seed))
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// stdout is the game screen, so logs only ever go to a file.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            cli.log_level(),
        ))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.engine_config();
    config.validate().context("invalid engine configuration")?;
    ensure!(cli.tick_ms > 0, "--tick-ms must be at least 1");

    info!(
        rows = config.rows,
        cols = config.cols,
        seed = config.seed,
        randomizer = config.randomizer.as_str(),
        tick_ms = cli.tick_ms,
        "starting twin-tetris"
    );

    // The menu always sits at the bottom so Esc from a game lands there.
    let mut stack = StateStack::with_root(Screen::Menu);
    if let Some(mode) = cli.mode {
        stack.push(Screen::Running(Game::new(mode.into(), config)?));
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!(key_release_events = term.enhanced_keys(), "terminal ready");

    let result = run(
        &mut term,
        &mut stack,
        config,
        Duration::from_millis(cli.tick_ms),
    );

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    stack: &mut StateStack,
    config: EngineConfig,
    tick_duration: Duration,
) -> Result<()> {
    let board_view = BoardView::default();
    let menu_view = MenuView;
    let mut fb = FrameBuffer::new(0, 0);
    let mut log = EventLog::new();
    let mut last_tick = Instant::now();

    loop {
        if stack.take_changed() {
            term.invalidate();
        }

        // Render.
        let Some(top) = stack.top() else {
            return Ok(());
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match top {
            Screen::Menu => menu_view.render_into(viewport, &mut fb),
            Screen::Running(game) => {
                board_view.render_into(&game.snapshots(), game.mode().titles(), viewport, &mut fb)
            }
        }
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let transition = match stack.top_mut() {
                        Some(screen) => screen.handle_key(key, &config),
                        None => Transition::None,
                    };
                    stack.apply(transition);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(screen) = stack.top_mut() {
                screen.update(&mut log);
            }
            for notice in log.drain() {
                if notice.event.game_over {
                    info!(player = notice.player.as_str(), "board topped out");
                }
            }
        }
    }
}
