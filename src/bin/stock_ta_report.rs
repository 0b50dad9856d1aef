//! Report binary for stock-ta.
//!
//! Usage:
//!     stock_ta_report --input history.json [--start 2024-01-01 --end 2024-03-31]
//!         [--view all|price|candles|volume|rsi] [--format json|table]
//!
//! Reads a daily history (a JSON array of rows, or an object with a
//! `historical` array), computes SMA(20) and RSI(14), restricts every series
//! to the requested window and writes the selected view to stdout.
//! Logs go to stderr; set `RUST_LOG=debug` for pipeline detail.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ta_core::prelude::*;
use ta_indicators::RsiZone;
use ta_pipeline::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "stock_ta_report", version, about = "SMA/RSI report over a daily price history")]
struct Args {
    /// History file (JSON). Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// First day of the window (YYYY-MM-DD).
    #[arg(long, requires = "end")]
    start: Option<String>,

    /// Last day of the window (YYYY-MM-DD).
    #[arg(long, requires = "start")]
    end: Option<String>,

    /// Which view to emit.
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    All,
    Price,
    Candles,
    Volume,
    Rsi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

/// Validated report settings.
#[derive(Debug, Clone)]
struct ReportConfig {
    input: Option<PathBuf>,
    window: Option<DateWindow>,
    view: View,
    format: Format,
}

impl ReportConfig {
    fn from_args(args: Args) -> Result<Self> {
        let window = match (args.start.as_deref(), args.end.as_deref()) {
            (Some(start), Some(end)) => {
                let window = DateWindow::parse(start, end)
                    .with_context(|| format!("invalid window {start}..{end}"))?;
                if window.is_inverted() {
                    bail!("window start {} is after end {}", window.start, window.end);
                }
                Some(window)
            }
            _ => None,
        };

        Ok(Self {
            input: args.input,
            window,
            view: args.view,
            format: args.format,
        })
    }
}

/// Parse a history document: a bare row array or an object with a
/// `historical` array. Row errors are reported as-is.
fn parse_history(raw: &str) -> Result<Vec<HistoricalRow>> {
    let document: Value = serde_json::from_str(raw).context("history is not valid JSON")?;
    let rows = match document {
        Value::Object(mut fields) => fields
            .remove("historical")
            .context("history object has no `historical` field")?,
        rows => rows,
    };
    serde_json::from_value(rows).context("invalid history rows")
}

fn load_history(input: Option<&PathBuf>) -> Result<Vec<HistoricalRow>> {
    let mut raw = String::new();
    match input {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?
                .read_to_string(&mut raw)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read history from stdin")?;
        }
    }
    parse_history(&raw)
}

fn write_json(out: &mut impl Write, view: View, aligned: &AlignedSeries) -> Result<()> {
    match view {
        View::All => serde_json::to_writer_pretty(&mut *out, aligned)?,
        View::Price => serde_json::to_writer_pretty(&mut *out, &price_points(aligned))?,
        View::Candles => serde_json::to_writer_pretty(&mut *out, &candles(aligned))?,
        View::Volume => serde_json::to_writer_pretty(&mut *out, &volume_bars(aligned))?,
        View::Rsi => serde_json::to_writer_pretty(&mut *out, &rsi_points(aligned))?,
    }
    writeln!(out)?;
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn zone_cell(zone: Option<RsiZone>) -> &'static str {
    zone.as_ref().map_or("-", RsiZone::as_str)
}

fn write_table(out: &mut impl Write, view: View, aligned: &AlignedSeries) -> Result<()> {
    match view {
        View::All => {
            writeln!(
                out,
                "{:<10} {:>10} {:>10} {:>10} {:>10} {:>8} {:>10} {:>7} {:<10}",
                "date", "open", "high", "low", "close", "volume", "sma", "rsi", "zone"
            )?;
            for (k, row) in aligned.historical.iter().enumerate() {
                writeln!(
                    out,
                    "{:<10} {:>10} {:>10} {:>10} {:>10} {:>8} {:>10} {:>7} {:<10}",
                    aligned.dates[k],
                    cell(row.open),
                    cell(row.high),
                    cell(row.low),
                    cell(row.close),
                    row.volume.map_or_else(|| "-".to_string(), format_volume),
                    cell(aligned.sma.value(k)),
                    cell(aligned.rsi.value(k)),
                    zone_cell(aligned.rsi.value(k).map(RsiZone::classify)),
                )?;
            }
        }
        View::Price => {
            writeln!(out, "{:<10} {:>10} {:>10}", "date", "price", "sma")?;
            for point in price_points(aligned) {
                writeln!(out, "{:<10} {:>10.2} {:>10.2}", point.date, point.price, point.sma)?;
            }
        }
        View::Candles => {
            writeln!(
                out,
                "{:<10} {:>10} {:>10} {:>10} {:>10} {:<4}",
                "date", "open", "high", "low", "close", "dir"
            )?;
            for candle in candles(aligned) {
                let direction = match candle.direction {
                    CandleDirection::Up => "up",
                    CandleDirection::Down => "down",
                };
                writeln!(
                    out,
                    "{:<10} {:>10} {:>10} {:>10} {:>10} {:<4}",
                    candle.date,
                    cell(candle.open),
                    cell(candle.high),
                    cell(candle.low),
                    cell(candle.close),
                    direction,
                )?;
            }
        }
        View::Volume => {
            writeln!(out, "{:<10} {:>8}", "date", "volume")?;
            for bar in volume_bars(aligned) {
                let volume = bar.volume.map_or_else(|| "-".to_string(), format_volume);
                writeln!(out, "{:<10} {:>8}", bar.date, volume)?;
            }
        }
        View::Rsi => {
            writeln!(out, "{:<10} {:>7} {:<10}", "date", "rsi", "zone")?;
            for point in rsi_points(aligned) {
                writeln!(out, "{:<10} {:>7.2} {:<10}", point.date, point.rsi, zone_cell(point.zone))?;
            }
        }
    }
    Ok(())
}

fn run(config: &ReportConfig) -> Result<()> {
    let rows = load_history(config.input.as_ref())?;
    info!(rows = rows.len(), "loaded history");

    let data = StockDataAggregator::build(rows);
    let aligned = data.select(config.window.as_ref());
    info!(selected = aligned.len(), total = data.len(), "selected window");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match config.format {
        Format::Json => write_json(&mut out, config.view, &aligned)?,
        Format::Table => write_table(&mut out, config.view, &aligned)?,
    }
    out.flush().context("failed to write report")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ReportConfig::from_args(Args::parse())?;
    run(&config)
}
