//! Trisort command line demonstration.
//!
//! Sorts its arguments and prints the resulting permutation, one index per line.
//! Logs go to stderr and are controlled by `RUST_LOG`. Malformed input exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use trisort::{KeyLayout, TrieSort};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "trisort", version, about)]
struct Args {
    /// Strings to sort
    keys: Vec<String>,

    /// Fixed key width (defaults to the length of the first key)
    #[arg(short, long)]
    width: Option<usize>,

    /// Accept keys of different lengths; a prefix sorts before its extensions
    #[arg(short, long, conflicts_with = "width")]
    terminated: bool,

    /// Print the sorted keys instead of their indices
    #[arg(long)]
    keys_out: bool,

    /// Log trie statistics once sorting completes
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn layout(&self) -> KeyLayout {
        match (self.terminated, self.width) {
            (true, _) => KeyLayout::Terminated,
            (false, Some(width)) => KeyLayout::Fixed(width),
            (false, None) => KeyLayout::Inferred,
        }
    }
}

/// Initialize the logging system.
fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global tracing subscriber")
}

/// Sorts the keys named by `args` and writes one line per key to `out`.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let layout = args.layout();

    let sorted = TrieSort::build(&args.keys, layout)
        .with_context(|| format!("cannot sort {} keys with layout {layout:?}", args.keys.len()))?;

    if args.stats {
        let stats = sorted.stats();
        info!(
            keys = stats.keys,
            nodes = stats.nodes,
            symbols_read = stats.symbols_read,
            extensions = stats.extensions,
            max_depth = stats.max_depth,
            "sorted"
        );
    }

    for index in &sorted {
        if args.keys_out {
            writeln!(out, "{}", args.keys[index])?;
        } else {
            writeln!(out, "{index}")?;
        }
    }
    out.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let args = Args::parse();
    let mut out = BufWriter::new(io::stdout().lock());
    run(&args, &mut out)
}
