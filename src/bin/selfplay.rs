//! Advisor self-play CLI.
//!
//! Usage:
//!   cargo run --bin selfplay -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin selfplay                   # Default: 20 games, 4 random opening plies
//!   cargo run --bin selfplay -- -n 100 -o 8   # 100 games, 8 random opening plies
//!   cargo run --bin selfplay -- --seed 42     # Reproducible run

use segments::selfplay::{run_selfplay, SelfPlayConfig};
use std::env;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'selfplay --help' for usage.");
            std::process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("Configuration:");
        println!("  Games:          {}", config.num_games);
        println!("  Opening plies:  {}", config.opening_plies);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
    }

    let report = run_selfplay(&config);
    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "selfplay_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(SelfPlayConfig, bool), String> {
    let mut config = SelfPlayConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--games" => {
                config.num_games = parse_value(args, i)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, i)?);
                i += 1;
            }
            "-o" | "--opening" => {
                config.opening_plies = parse_value(args, i)?;
                i += 1;
            }
            "--json" => {
                write_json = true;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok((config, write_json))
}

/// Parse the value following the flag at `args[i]`.
fn parse_value<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T, String> {
    let flag = &args[i];
    let value = args
        .get(i + 1)
        .ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn print_help() {
    println!("Segments advisor self-play\n");
    println!("Usage: selfplay [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --games <N>      Number of games to play (default 20)");
    println!("  -s, --seed <SEED>    Seed for the random openings");
    println!("  -o, --opening <N>    Random plies before the advisor takes over (default 4)");
    println!("      --json           Also write a timestamped JSON report");
    println!("  -q, --quiet          Only print the report");
    println!("  -v, --verbose        Print a line per game");
    println!("  -h, --help           Show this help message");
}
