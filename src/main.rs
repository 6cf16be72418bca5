//! Wordle Eliminator - CLI
//!
//! Solves daily and seeded random puzzles from the remote feedback API, one at
//! a time or in batches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_eliminator::{
    commands::{
        BATCH_SIZES, params::DEFAULT_DAILY_SIZE, params::DEFAULT_MAX_SEED,
        params::DEFAULT_RANDOM_SIZE, params::DEFAULT_SEED, solve_all_seeds, solve_all_sizes,
        solve_daily, solve_random,
    },
    config::{DEFAULT_TIMEOUT_SECS, SolverConfig},
    oracle::{DEFAULT_API_URL, FeedbackOracle, HttpOracle, LocalOracle},
    output::{print_random_results, print_size_results, print_solve_report, to_json},
    solver::{DEFAULT_MAX_ATTEMPTS, SolveReport, Solver},
    wordlists::{DEFAULT_DICTIONARY, FileWordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_eliminator",
    about = "Wordle solver that locks confirmed letters and filters a dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the feedback API
    #[arg(long, global = true, env = "WORDLE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Newline-delimited word list
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_DICTIONARY",
        default_value = DEFAULT_DICTIONARY
    )]
    dictionary: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "WORDLE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Give up after this many guesses
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Score guesses against the local dictionary instead of the API
    #[arg(long, global = true)]
    offline: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the daily puzzle (5-18 letters)
    Daily {
        /// Word length
        #[arg(short, long, default_value_t = DEFAULT_DAILY_SIZE)]
        size: usize,

        /// Show locked letters and candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve a seeded random puzzle (4-18 letters)
    Random {
        /// Word length
        #[arg(short, long, default_value_t = DEFAULT_RANDOM_SIZE)]
        size: usize,

        /// Puzzle seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Show locked letters and candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve the daily puzzle for every size from 5 to 18
    DailyAll,

    /// Solve random puzzles for every size and every seed up to --max-seed
    RandomAll {
        /// Highest seed to solve (0-1000)
        #[arg(long, default_value_t = DEFAULT_MAX_SEED)]
        max_seed: u64,

        /// Restrict the batch to one word length
        #[arg(short, long)]
        size: Option<usize>,
    },
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            api_url: self.api_url.clone(),
            dictionary: self.dictionary.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_attempts: self.max_attempts,
            offline: self.offline,
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = cli.config();
    let words = FileWordSource::new(&config.dictionary);

    if config.offline {
        tracing::info!(dictionary = %config.dictionary.display(), "using offline oracle");
        let oracle = LocalOracle::new(words.clone());
        run_command(&cli.command, &config, &oracle, &words, cli.json).await
    } else {
        let oracle = HttpOracle::new(&config.api_url, config.timeout)
            .context("Failed to create HTTP client")?;
        run_command(&cli.command, &config, &oracle, &words, cli.json).await
    }
}

async fn run_command<O: FeedbackOracle>(
    command: &Commands,
    config: &SolverConfig,
    oracle: &O,
    words: &FileWordSource,
    json: bool,
) -> Result<()> {
    let solver = Solver::new(oracle, words).with_max_attempts(config.max_attempts);

    match command {
        Commands::Daily { size, verbose } => {
            let report = solve_daily(&solver, *size).await?;
            finish_single(report, *verbose, json)
        }
        Commands::Random {
            size,
            seed,
            verbose,
        } => {
            let report = solve_random(&solver, *size, *seed).await?;
            finish_single(report, *verbose, json)
        }
        Commands::DailyAll => {
            let results = solve_all_sizes(&solver, BATCH_SIZES, !json).await;
            if json {
                println!("{}", to_json(&results)?);
            } else {
                print_size_results(&results);
            }
            Ok(())
        }
        Commands::RandomAll { max_seed, size } => {
            let sizes = size.map_or(BATCH_SIZES, |size| size..=size);
            let results = solve_all_seeds(&solver, sizes, *max_seed, !json).await?;
            if json {
                println!("{}", to_json(&results)?);
            } else {
                print_random_results(&results);
            }
            Ok(())
        }
    }
}

/// Print a single solve and turn a failed outcome into an error exit
fn finish_single(report: SolveReport, verbose: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(&report.to_result())?);
    } else {
        print_solve_report(&report, verbose);
    }

    report
        .into_result()
        .map(|_| ())
        .context("Failed to solve Wordle puzzle")
}
