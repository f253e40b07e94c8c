//! Local terminal harness for the wagering engine.
//!
//! Drives the full flow end to end without the UI or the hosted backend:
//! spawns the heart-map rotation, builds random selections, derives
//! combinations, prices them, and prints the resulting tickets.
//!
//! With `--seed` the run is deterministic: the rotation task is not spawned
//! and the map is re-shuffled from the seeded RNG between tickets instead.

use anyhow::{Context, Result};
use clap::Parser;
use coracoes_engine::{potential_prize, spawn_rotation, HeartMapper, PushOutcome, SelectionBuilder};
use coracoes_types::{BetType, Heart, Position, MAP_ROTATION_INTERVAL};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "coracoes-simulator", about = "Play random heart-lottery tickets locally")]
struct Args {
    /// Number of tickets to play.
    #[arg(long, default_value_t = 10)]
    tickets: u32,

    /// Deterministic seed; disables the wall-clock rotation task.
    #[arg(long)]
    seed: Option<u64>,

    /// Rotation interval in milliseconds (wall-clock mode only).
    #[arg(long, default_value_t = MAP_ROTATION_INTERVAL.as_millis() as u64)]
    rotation_ms: u64,

    /// Delay between tickets in milliseconds.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Draw period label stamped on every ticket.
    #[arg(long, default_value = "night")]
    period: String,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

fn random_stake(rng: &mut impl Rng) -> f64 {
    // Whole-cent stakes between 0.50 and 50.00.
    f64::from(rng.gen_range(50u32..=5_000)) / 100.0
}

fn play_ticket(
    rng: &mut StdRng,
    mapper: &HeartMapper,
    period: &str,
) -> Result<()> {
    let bet_type = *BetType::ALL
        .choose(rng)
        .context("bet type table is empty")?;
    let position = *Position::ALL
        .choose(rng)
        .context("position table is empty")?;
    let stake = random_stake(rng);

    let mut builder = SelectionBuilder::new(bet_type);
    loop {
        let heart = *Heart::ALL.choose(rng).context("heart table is empty")?;
        match builder.push(heart)? {
            PushOutcome::Accepted { .. } => continue,
            PushOutcome::Completed => break,
        }
    }

    // One snapshot for the whole derivation.
    let map = mapper.snapshot();
    let ticket = builder.ticket(map, position, stake, period)?;
    ticket.validate()?;

    let combination = match ticket.numbers.first() {
        Some(_) => builder.derive(map)?.to_string(),
        None => "-".to_string(),
    };
    let prize = potential_prize(bet_type, position, stake);
    info!(
        bet_type = ?bet_type,
        position = position.rank(),
        stake,
        combination = %combination,
        potential_prize = prize,
        "ticket played"
    );
    println!("{}", serde_json::to_string(&ticket)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mapper = HeartMapper::new(&mut rng);
            info!(seed, tickets = args.tickets, "deterministic run");
            for _ in 0..args.tickets {
                // Stands in for the timer: one rotation per ticket.
                mapper.regenerate(&mut rng);
                play_ticket(&mut rng, &mapper, &args.period)?;
            }
        }
        None => {
            let mut rng = StdRng::from_entropy();
            let mapper = Arc::new(HeartMapper::new(&mut rng));
            let rotation = spawn_rotation(
                mapper.clone(),
                Duration::from_millis(args.rotation_ms),
            );
            info!(tickets = args.tickets, rotation_ms = args.rotation_ms, "live run");
            for _ in 0..args.tickets {
                play_ticket(&mut rng, &mapper, &args.period)?;
                tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
            }
            rotation.abort();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deterministic_run_flags() {
        let args = Args::parse_from([
            "coracoes-simulator",
            "--tickets",
            "3",
            "--seed",
            "7",
            "--period",
            "morning",
        ]);
        assert_eq!(args.tickets, 3);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.period, "morning");
    }

    #[test]
    fn default_rotation_matches_engine_interval() {
        let args = Args::parse_from(["coracoes-simulator"]);
        assert_eq!(args.rotation_ms, MAP_ROTATION_INTERVAL.as_millis() as u64);
        assert!(args.seed.is_none());
    }
}
