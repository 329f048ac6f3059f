use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, LevelFilter, WriteLogger};

use torus_snake::config::GameConfig;
use torus_snake::game::{Outcome, SnakeGame};

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Snake on a wrap-around board, in your terminal")]
struct Cli {
    /// Seed for apple placement, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Nothing may go to the screen while it is in raw mode, so only log to a file
    if let Some(path) = &cli.log_file {
        let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), file).context("cannot set up logging")?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("starting with seed {}", seed);

    // The game, and with it raw mode, is gone by the time anything is printed
    let outcome = run(GameConfig::default(), StdRng::seed_from_u64(seed));

    match outcome {
        Ok(Outcome::Lost { score }) => println!("You scored {}!", score),
        Ok(Outcome::Won { score }) => println!("You filled the board! You scored {}!", score),
        Ok(Outcome::Quit) => {}
        Err(e) => {
            error!("{:#}", e);
            return Err(e);
        }
    }

    Ok(())
}

fn run(config: GameConfig, rng: StdRng) -> Result<Outcome> {
    let mut game = SnakeGame::new(config)?;

    if !game.show_intro()? {
        return Ok(Outcome::Quit);
    }

    game.play(rng)
}
