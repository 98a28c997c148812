//! lotto-sim - command-line lotto draw simulator
//!
//! Draws random combinations and counts how often they share 2 to 7 numbers
//! with the picks given on the command line.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lotto_sim::{
  msg::SimulationReport,
  util::{parse_buckets, parse_numbers},
  xorshift32::Xorshift32,
  ChoiceSet, SimulationConfig, Simulator,
};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lotto-sim")]
#[command(about = "Simulate lotto draws against your numbers")]
struct Cli {
  /// Your numbers, e.g. "3,7,12,19,24,30,33"
  #[arg(short, long)]
  numbers: String,

  /// How many draws to simulate
  #[arg(short, long)]
  rounds: u32,

  /// JSON file with simulation settings
  #[arg(long)]
  config: Option<PathBuf>,

  /// Lowest drawable number
  #[arg(long)]
  min: Option<u16>,

  /// Highest drawable number
  #[arg(long)]
  max: Option<u16>,

  /// Numbers drawn per round
  #[arg(long)]
  count: Option<u8>,

  /// Match counts to report, e.g. "5,6,7"
  #[arg(long, conflicts_with = "jackpot_only")]
  buckets: Option<String>,

  /// Only report 5, 6 and 7 matches
  #[arg(long)]
  jackpot_only: bool,

  /// Seed for a reproducible run
  #[arg(long)]
  seed: Option<u32>,

  /// Print the report as JSON
  #[arg(long)]
  json: bool,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let config = load_config(&cli)?;
  let universe = config.validate().context("invalid simulation settings")?;

  let numbers = parse_numbers(&cli.numbers).context("could not read your numbers")?;
  let choices = ChoiceSet::new(&numbers, &universe, config.number_count).with_context(|| {
    format!(
      "pick {} different numbers between {} and {}",
      config.number_count,
      universe.low(),
      universe.high()
    )
  })?;
  config.validate_rounds(cli.rounds).with_context(|| {
    format!(
      "number of draws must be between {} and {}",
      config.min_rounds, config.max_rounds
    )
  })?;

  let rng: Box<dyn RngCore> = match cli.seed {
    Some(seed) => Box::new(Xorshift32::new(seed)),
    None => Box::new(StdRng::from_os_rng()),
  };

  info!(rounds = cli.rounds, seed = ?cli.seed, "starting simulation");
  let mut simulator = Simulator::new(config.clone(), rng)?;
  let tally = simulator.run(&choices, cli.rounds)?;
  let report = SimulationReport::new(config, &choices, cli.seed, tally)?;

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    for line in report.lines() {
      println!("{}", line);
    }
  }

  Ok(())
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

/// Defaults, then the config file, then individual flags.
fn load_config(cli: &Cli) -> Result<SimulationConfig> {
  let mut config = match &cli.config {
    Some(path) => {
      let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config file {}", path.display()))?;
      serde_json::from_str(&text)
        .with_context(|| format!("could not parse config file {}", path.display()))?
    },
    None => SimulationConfig::default(),
  };

  if cli.jackpot_only {
    config = config.with_reported_buckets(5..=7);
  }
  if let Some(min) = cli.min {
    config.min_number = min;
  }
  if let Some(max) = cli.max {
    config.max_number = max;
  }
  if let Some(count) = cli.count {
    config.number_count = count;
  }
  if let Some(buckets) = &cli.buckets {
    let buckets = parse_buckets(buckets).context("could not read buckets")?;
    config = config.with_reported_buckets(buckets);
  }

  Ok(config)
}
