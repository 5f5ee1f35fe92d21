//! CLI frontend for the uranai fortune teller.

use std::path::{Path, PathBuf};
use std::process;

use chrono::{Local, NaiveDate};
use clap::Parser;

use uranai_core::{StrategyKind, TellerConfig, UserProfile, load_profile};

/// Default profile path, read when `--profile` is not given.
const PROFILE_PATH: &str = "profile.json";

#[derive(Parser)]
#[command(
    name = "uranai",
    about = "uranai — lucky color and lucky number for today",
    version
)]
struct Cli {
    /// Strategy identifier: random or birthday
    #[arg(default_value = "random")]
    strategy: String,

    /// Profile JSON file: {"name": string, "birthday": "YYYY-MM-DD"}
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Reference date for the reading (default: today's local date)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// RNG seed for reproducible random readings
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let kind: StrategyKind = cli.strategy.parse().map_err(|e: uranai_core::UranaiError| e.to_string())?;
    let profile = acquire_profile(cli.profile.as_deref())?;
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let mut config = TellerConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let strategy = config.strategy(kind).map_err(|e| e.to_string())?;
    let mut rng = config.rng();

    let fortune = strategy.tell(&profile, today, &mut rng);
    println!("{fortune}");

    Ok(())
}

/// Resolve the profile to read a fortune for.
///
/// An explicit `--profile` path must exist and parse. Without one,
/// `./profile.json` is read if present; otherwise the built-in profile
/// stands in so the tool works out of the box.
fn acquire_profile(explicit: Option<&Path>) -> Result<UserProfile, String> {
    match explicit {
        Some(path) => load_profile(path).map_err(|e| e.to_string()),
        None => {
            let default = Path::new(PROFILE_PATH);
            if default.exists() {
                load_profile(default).map_err(|e| e.to_string())
            } else {
                Ok(UserProfile::builtin())
            }
        }
    }
}
