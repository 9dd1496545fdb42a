//! Signalab CLI — evaluate strategy sets against CSV candle files.
//!
//! Commands:
//! - `evaluate` — latest-bar signal of every strategy for every symbol
//! - `replay` — walk each symbol's history bar by bar and report every signal
//! - `list` — print the registered strategy names and their default warm-up
//!
//! Candle files are CSV with a header row
//! `open_time,close_time,open,high,low,close,volume` (RFC 3339 timestamps).
//! The symbol is the file stem.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use signalab_core::strategies::StrategyKind;
use signalab_core::{create_strategy, Candle, Signal, Strategy, StrategyConfig, StrategySet};

#[derive(Parser)]
#[command(
    name = "signalab",
    about = "Signalab CLI — technical indicator and signal engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every strategy on the latest bar of each candle file.
    Evaluate {
        /// CSV candle files, one per symbol.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Strategy set TOML. Defaults to every strategy with default params.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only use the trailing N candles of each file.
        #[arg(long)]
        window: Option<usize>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Replay each candle file bar by bar and report every non-neutral signal.
    Replay {
        /// CSV candle files, one per symbol.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Strategy set TOML. Defaults to every strategy with default params.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the registered strategies.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One strategy verdict for one symbol at one bar.
#[derive(Debug, Clone, Serialize)]
struct SignalRow {
    symbol: String,
    strategy: String,
    bar: usize,
    open_time: chrono::DateTime<chrono::Utc>,
    close: f64,
    signal: Signal,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            files,
            config,
            window,
            format,
        } => run_evaluate(&files, config.as_deref(), window, format),
        Commands::Replay {
            files,
            config,
            format,
        } => run_replay(&files, config.as_deref(), format),
        Commands::List => run_list(),
    }
}

fn run_evaluate(
    files: &[PathBuf],
    config: Option<&Path>,
    window: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    if window == Some(0) {
        bail!("--window must be at least 1");
    }
    let strategies = load_strategies(config)?;
    let series = load_all(files)?;

    let mut rows: Vec<SignalRow> = series
        .par_iter()
        .flat_map_iter(|(symbol, candles)| {
            let start = window.map_or(0, |w| candles.len().saturating_sub(w));
            let view = &candles[start..];
            strategies
                .iter()
                .filter_map(move |strategy| latest_row(symbol, strategy.as_ref(), view))
        })
        .collect();
    rows.sort_by(|a, b| (&a.symbol, &a.strategy).cmp(&(&b.symbol, &b.strategy)));

    print_rows(&rows, format)
}

fn run_replay(files: &[PathBuf], config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let strategies = load_strategies(config)?;
    let series = load_all(files)?;

    let mut rows: Vec<SignalRow> = series
        .par_iter()
        .flat_map_iter(|(symbol, candles)| {
            strategies
                .iter()
                .flat_map(move |strategy| replay_rows(symbol, strategy.as_ref(), candles))
        })
        .collect();
    rows.sort_by(|a, b| (&a.symbol, a.bar, &a.strategy).cmp(&(&b.symbol, b.bar, &b.strategy)));

    print_rows(&rows, format)
}

fn run_list() -> Result<()> {
    println!("{:<28} {:>8}", "Strategy", "Warm-up");
    println!("{}", "-".repeat(37));
    for kind in StrategyKind::ALL {
        let strategy = create_strategy(&StrategyConfig::new(kind.as_str()))?;
        println!("{:<28} {:>8}", kind.as_str(), strategy.warmup_bars());
    }
    Ok(())
}

fn load_strategies(config: Option<&Path>) -> Result<Vec<Box<dyn Strategy>>> {
    let set = match config {
        Some(path) => StrategySet::from_file(path)?,
        None => StrategySet::all_defaults(),
    };
    if set.is_empty() {
        bail!("strategy set is empty");
    }
    let strategies = set.build()?;
    info!(count = strategies.len(), "strategies loaded");
    Ok(strategies)
}

fn load_all(files: &[PathBuf]) -> Result<Vec<(String, Vec<Candle>)>> {
    files
        .iter()
        .map(|path| {
            let candles = load_candles(path)?;
            let symbol = symbol_from_path(path)?;
            info!(symbol = %symbol, bars = candles.len(), "candles loaded");
            Ok((symbol, candles))
        })
        .collect()
}

fn symbol_from_path(path: &Path) -> Result<String> {
    match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => Ok(stem.to_uppercase()),
        _ => bail!("cannot derive a symbol from {}", path.display()),
    }
}

/// Read a candle CSV and check ordering and OHLC sanity.
fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open candle file {}", path.display()))?;

    let mut candles: Vec<Candle> = Vec::new();
    for (line, record) in reader.deserialize::<Candle>().enumerate() {
        let candle = record.with_context(|| format!("{}: row {}", path.display(), line + 1))?;
        if let Some(prev) = candles.last() {
            if candle.open_time <= prev.open_time {
                bail!(
                    "{}: row {} is not after the previous candle",
                    path.display(),
                    line + 1
                );
            }
        }
        if !candle.is_sane() {
            warn!(file = %path.display(), row = line + 1, "candle fails OHLC sanity check");
        }
        candles.push(candle);
    }

    if candles.is_empty() {
        bail!("{} contains no candles", path.display());
    }
    Ok(candles)
}

fn latest_row(symbol: &str, strategy: &dyn Strategy, candles: &[Candle]) -> Option<SignalRow> {
    let last = candles.last()?;
    Some(SignalRow {
        symbol: symbol.to_string(),
        strategy: strategy.name().to_string(),
        bar: candles.len() - 1,
        open_time: last.open_time,
        close: last.close,
        signal: strategy.evaluate(candles),
    })
}

/// Every non-neutral signal, each decided on a window truncated at its bar.
fn replay_rows(symbol: &str, strategy: &dyn Strategy, candles: &[Candle]) -> Vec<SignalRow> {
    let first = strategy.warmup_bars().max(1);
    (first..=candles.len())
        .filter_map(|end| latest_row(symbol, strategy, &candles[..end]))
        .filter(|row| !row.signal.is_none())
        .collect()
}

fn print_rows(rows: &[SignalRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("No signals.");
                return Ok(());
            }
            println!(
                "{:<10} {:<28} {:>7} {:<26} {:>12} {:>6}",
                "Symbol", "Strategy", "Bar", "Open time", "Close", "Signal"
            );
            println!("{}", "-".repeat(94));
            for row in rows {
                println!(
                    "{:<10} {:<28} {:>7} {:<26} {:>12.4} {:>6}",
                    row.symbol,
                    row.strategy,
                    row.bar,
                    row.open_time.to_rfc3339(),
                    row.close,
                    row.signal
                );
            }
        }
    }
    Ok(())
}
