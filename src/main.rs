/* fft-tables | main.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Command line front end: generates the tables and writes them out */

/******************************************************************************/

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fft_tables::{Convention, Emitter, GenConfig, IndexType, JsonEmitter, Precision, RustEmitter};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/******************************************************************************/

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Rust,
    Json,
}

/// Generate radix-2 FFT twiddle and bit reversal tables.
#[derive(Parser)]
#[command(name = "fft-tables", version, about = "Generate radix-2 FFT lookup tables")]
struct Args {
    /// Max FFT size
    #[arg(value_name = "N")]
    max_size: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Rust)]
    format: Format,

    /// Floating point width of the sine tables
    #[arg(long, value_enum, default_value_t = Precision::F32)]
    precision: Precision,

    /// Integer type of the bit reversal tables (Rust output only)
    #[arg(long, value_enum, default_value_t = IndexType::U16)]
    index_type: IndexType,

    /// What the bit reversal tables store at each index
    #[arg(long, value_enum, default_value_t = Convention::SwapPairs)]
    convention: Convention,

    /// Skip the bit reversal tables
    #[arg(long)]
    no_bitrev: bool,

    /// Output file, standard output if omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Log more (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GenConfig {
        let config = GenConfig::new(self.max_size).with_convention(self.convention);
        if self.no_bitrev {
            config.without_bitrev()
        } else {
            config
        }
    }

    fn emitter(&self) -> Box<dyn Emitter> {
        match self.format {
            Format::Rust => Box::new(RustEmitter {
                precision: self.precision,
                index_type: self.index_type,
            }),
            Format::Json => Box::new(JsonEmitter {
                precision: self.precision,
                pretty: true,
            }),
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

/******************************************************************************/

/// Generates and renders the tables, then writes them out
///
/// Nothing is written, and an existing output file is left alone, unless rendering succeeded.
fn run(args: &Args) -> Result<()> {
    let config = args.config();
    if config.bitrev && args.format == Format::Rust {
        args.index_type
            .check(config.max_size)
            .with_context(|| format!("cannot emit tables for N = {}", config.max_size))?;
    }

    let tables = fft_tables::generate(&config)
        .with_context(|| format!("cannot generate tables for N = {}", config.max_size))?;
    let text = args
        .emitter()
        .render(&tables)
        .with_context(|| format!("cannot emit tables for N = {}", config.max_size))?;

    match &args.out {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "tables written");
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(&text).context("cannot write to stdout")?;
            out.flush().context("cannot write to stdout")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout may carry the tables
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    run(&args)
}

/******************************************************************************/
