use std::path::PathBuf;
use std::time::Instant;

use advent_solvers::config::{default_input, Config};
use advent_solvers::guard::SearchMode;
use advent_solvers::{days, logging};
use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "advent-solvers", version, about = "Daily puzzle solvers")]
struct Cli {
    /// Puzzle day.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,
    /// Puzzle part, 1 or 2.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,
    /// Read `day{DAY}test{N}.in` instead of `day{DAY}.in`.
    #[arg(short, long, value_name = "N")]
    test: Option<u32>,
    /// Explicit input file, overrides `--test`.
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Spread the day 6 obstacle search over all cores.
    #[arg(long)]
    parallel: bool,
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            day: cli.day,
            part: cli.part,
            input: cli.input.unwrap_or_else(|| default_input(cli.day, cli.test)),
            search_mode: if cli.parallel {
                SearchMode::Parallel
            } else {
                SearchMode::Sequential
            },
            verbosity: cli.verbose,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from(Cli::parse());
    logging::init(config.verbosity);
    debug!(?config, "starting");

    let input = config.load_input()?;
    let time = Instant::now();
    let answer = days::solve(&config, &input)?;
    println!("{answer}");
    info!(
        day = config.day,
        part = config.part,
        "{} seconds elapsed",
        time.elapsed().as_secs_f32()
    );
    Ok(())
}
