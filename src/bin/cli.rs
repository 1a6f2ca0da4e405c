//! Text front end for Ataxx
//!
//! Reads commands and moves from stdin, one per line. Type `help` once
//! running for the command list.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use ataxx::game::{Game, PlayerKind, Players};
use ataxx::EngineConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Play Ataxx in the terminal")]
struct Args {
    /// Search depth in plies for automated players
    #[arg(long, default_value_t = ataxx::search::MAX_DEPTH)]
    depth: u8,

    /// Seed for the engine's random source (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Who plays red: manual or auto
    #[arg(long, default_value_t = PlayerKind::Manual)]
    red: PlayerKind,

    /// Who plays blue: manual or auto
    #[arg(long, default_value_t = PlayerKind::Auto)]
    blue: PlayerKind,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("engine depth {} seed {seed}", args.depth);
    let config = EngineConfig::default()
        .with_depth(args.depth)
        .with_seed(seed);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let result = Game::new(stdin, stdout, config)
        .map(|game| game.with_players(Players::new(args.red, args.blue)))
        .and_then(|mut game| game.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
