//! lfilter: apply a filter described by a JSON config to a JSON array of
//! samples and print the result as a JSON array.
//!
//! ```text
//! lfilter --config ma3.json --input signal.json [--output filtered.json]
//! ```
//!
//! Config keys: `b`, `a`, optional `si` (see `smoothkit::FilterConfig`).
//! Set `RUST_LOG=debug` to trace validation and evaluation.
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use smoothkit::FilterConfig;

#[derive(Parser, Debug)]
#[command(name = "lfilter", about = "Direct-form linear filter over a JSON sample array")]
struct Args {
    /// Filter config (JSON with `b`, `a`, optional `si`).
    #[arg(long)]
    config: PathBuf,

    /// Input samples (JSON array of numbers).
    #[arg(long)]
    input: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = FilterConfig::from_path(&args.config)?;
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let x: Vec<f64> = serde_json::from_str(&text)
        .with_context(|| format!("parsing samples in {}", args.input.display()))?;
    info!("loaded {} samples, len(b)={} len(a)={}", x.len(), cfg.b.len(), cfg.a.len());

    let y = cfg.apply(&x)?;
    let out = serde_json::to_string(&y)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, out).with_context(|| format!("writing {}", path.display()))?;
            info!("written → {}", path.display());
        }
        None => println!("{out}"),
    }
    Ok(())
}
