//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100 runs to P1
//!   cargo run --bin simulate -- -n 50 -p 3     # 50 runs to prestige 3
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use astromine::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ASTROMINE BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:             {}", config.num_runs);
    println!("  Target Prestiges: {}", config.target_prestiges);
    println!("  Max Ticks:        {}", config.max_ticks_per_run);
    println!("  Taps/sec:         {}", config.taps_per_second);
    if let Some(seed) = config.seed {
        println!("  Seed:             {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-p" | "--prestiges" => {
                if i + 1 < args.len() {
                    config.target_prestiges = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--taps" => {
                if i + 1 < args.len() {
                    config.taps_per_second = args[i + 1].parse().unwrap_or(4);
                    i += 1;
                }
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--full" => {
                config = SimConfig::full_progression();
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Astromine Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of simulation runs (default: 100)");
    println!("    -p, --prestiges <P>  Target prestige count (default: 1)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -t, --ticks <T>      Max ticks per run (default: 1,000,000)");
    println!("    --taps <N>           Simulated taps per second (default: 4)");
    println!("    --quick              Quick sanity check (10 short runs)");
    println!("    --full               Full test across 3 prestige cycles");
    println!("    --json               Save JSON report");
    println!("    -v, --verbose        Verbose output");
    println!("    -h, --help           Show this help");
}
