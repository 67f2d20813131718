use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::EngineConfig;
use grid_snake::engine::{Engine, GameStatus};
use grid_snake::input::{GameInput, poll_input};
use grid_snake::logging::init_file_logger;
use grid_snake::renderer::{self, ViewState};
use grid_snake::terminal_runtime::TerminalSession;
use log::{LevelFilter, info};

/// Input poll budget per frame.
const FRAME_POLL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a walled grid, in the terminal")]
struct Cli {
    /// JSON engine config; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length, walls included. Overrides the config file.
    #[arg(long)]
    grid_size: Option<u16>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Report setup problems before raw mode hides stderr.
    let engine = match build_engine(&cli) {
        Ok(engine) => engine,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(engine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn build_engine(cli: &Cli) -> Result<Engine, String> {
    if let Some(path) = &cli.log_file {
        init_file_logger(path, LevelFilter::Debug)
            .map_err(|error| format!("failed to open log file {}: {error}", path.display()))?;
    }

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path).map_err(|error| error.to_string())?,
        None => EngineConfig::default(),
    };
    if let Some(size) = cli.grid_size {
        config.grid_size = size;
    }

    let engine = match cli.seed {
        Some(seed) => Engine::with_seed(config, seed),
        None => Engine::new(config),
    };
    engine.map_err(|error| error.to_string())
}

fn run(mut engine: Engine) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let epoch = Instant::now();
    let mut view = ViewState::default();

    info!("starting on {0}x{0} grid", engine.grid().size());

    loop {
        let snapshot = engine.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, view))?;

        if let Some(input) = poll_input(FRAME_POLL)? {
            if input == GameInput::Quit {
                break;
            }
            handle_input(&mut engine, &mut view, input);
        }

        if view.started && !view.paused {
            engine.tick(epoch.elapsed());
        }
    }

    info!("quit with score {}", engine.score());
    Ok(())
}

fn handle_input(engine: &mut Engine, view: &mut ViewState, input: GameInput) {
    let over = engine.status() == GameStatus::Over;

    match input {
        GameInput::Confirm | GameInput::Pause if !view.started => view.started = true,
        GameInput::Confirm | GameInput::Restart if over => {
            engine.reset();
            view.paused = false;
        }
        GameInput::Pause if view.started && !over => view.paused = !view.paused,
        GameInput::Direction(direction) if view.started && !view.paused => {
            engine.set_direction(direction);
        }
        _ => {}
    }
}
