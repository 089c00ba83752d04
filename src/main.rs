use anyhow::{bail, Result};
use clap::Parser;
use maze_robot::{Grid, Simulation, SimulationConfig, StrategyKind};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Walk a robot through a maze until it finds an exit or gets stuck
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze file: `*` walls, `S` start, `E` exits, anything else is floor
    #[arg(default_value = "maze.txt")]
    maze: PathBuf,

    /// Navigation strategy; asked interactively when omitted
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many moves
    #[arg(long, default_value_t = SimulationConfig::default().max_steps)]
    max_steps: usize,

    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Do not draw the maze after every move
    #[arg(long)]
    no_render: bool,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("maze_robot=info"));

    // Logs go to stderr so they never end up in the middle of a frame
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not set up logging: {}", e);
    }
}

fn choose_strategy() -> Result<StrategyKind> {
    print!("Choose a robot (1: random walk, 2: right-hand rule): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;

    match StrategyKind::from_menu_choice(&choice) {
        Some(kind) => Ok(kind),
        None => bail!("invalid choice {:?}", choice.trim()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let grid = Grid::load(&args.maze)?;

    let kind = match args.strategy {
        Some(kind) => kind,
        None => choose_strategy()?,
    };

    let config = SimulationConfig {
        max_steps: args.max_steps,
        seed: args.seed,
    };
    let delay = Duration::from_millis(args.delay_ms);

    let mut simulation = Simulation::new(grid, kind, &config);
    let state = if args.no_render {
        simulation.run(|_, _| Ok::<(), io::Error>(()))?
    } else {
        simulation.play(&mut io::stdout(), delay)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        match state.finished_reason {
            Some(reason) => println!(
                "Finished after {} moves at ({}, {}): {:?}",
                state.steps, state.position.0, state.position.1, reason
            ),
            None => println!("Stopped after {} moves", state.steps),
        }
    }

    Ok(())
}
