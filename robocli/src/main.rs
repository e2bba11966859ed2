//! Interactive toy robot simulator.
//!
//! Reads one command per line from stdin until the stop token is entered.
//!
//! ```bash
//! printf 'PLACE 0,0,NORTH\nPATH 2,2\nREPORT\nSTOP\n' | robocli --obstacle 3,3
//! ```

mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use robot_board::generator::Generator;
use robot_board::{draw_board, Coordinate, Obstacle};
use robot_sim::{Simulator, SimulatorConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalCommunication;

#[derive(Debug, Parser)]
#[command(name = "robocli")]
#[command(about = "Moves a toy robot around a table top with text commands")]
struct Args {
    /// Largest x coordinate of the board
    #[arg(long, env = "ROBOT_BOARD_WIDTH", default_value_t = 5, value_parser = clap::value_parser!(Coordinate).range(0..))]
    width: Coordinate,

    /// Largest y coordinate of the board
    #[arg(long, env = "ROBOT_BOARD_HEIGHT", default_value_t = 5, value_parser = clap::value_parser!(Coordinate).range(0..))]
    height: Coordinate,

    /// Blocks the field X,Y, may be repeated
    #[arg(long = "obstacle", value_name = "X,Y", value_parser = parse_obstacle)]
    obstacles: Vec<Obstacle>,

    /// Number of obstacles to place on random free fields
    #[arg(long, value_name = "N", default_value_t = 0)]
    random_obstacles: usize,

    /// Seed for the random obstacles
    #[arg(long)]
    seed: Option<u128>,

    /// Input which ends the simulation
    #[arg(long, default_value = "stop")]
    stop_token: String,

    /// Prompt shown before every command
    #[arg(long, default_value = "Enter command")]
    prompt: String,

    /// Draw the board when the simulation starts and ends
    #[arg(long)]
    draw: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = SimulatorConfig {
        max_width: args.width,
        max_height: args.height,
        stop_token: args.stop_token,
        prompt: args.prompt,
    };
    let mut sim = Simulator::new(config, TerminalCommunication::new())
        .context("invalid simulator configuration")?;

    sim.add_obstacles(args.obstacles);

    if args.random_obstacles > 0 {
        let mut generator = match args.seed {
            Some(seed) => Generator::from_seed(seed),
            None => Generator::new(),
        };
        let obstacles = generator.generate_obstacles(sim.board(), args.random_obstacles);
        tracing::info!(count = obstacles.len(), "generated random obstacles");
        sim.add_obstacles(obstacles);
    }

    if args.draw {
        println!("{}", draw_board(sim.board(), sim.robot().position()));
    }

    sim.run().context("simulation aborted")?;

    if args.draw {
        println!("{}", draw_board(sim.board(), sim.robot().position()));
    }

    Ok(())
}

/// Parses an obstacle given as `X,Y`.
fn parse_obstacle(value: &str) -> Result<Obstacle, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;
    let x = x
        .trim()
        .parse::<Coordinate>()
        .map_err(|e| format!("invalid x coordinate '{}': {}", x.trim(), e))?;
    let y = y
        .trim()
        .parse::<Coordinate>()
        .map_err(|e| format!("invalid y coordinate '{}': {}", y.trim(), e))?;
    Ok(Obstacle::new(x, y))
}
