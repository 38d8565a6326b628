// typo-cli: shared argument parsing and command bodies for the CLI tools.
//
// The binaries only parse arguments and hand the process streams to the
// `run_*` functions here, so the commands can be driven from tests with
// in-memory readers and writers.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;
use typo_core::DEFAULT_LAYOUT;
use typo_engine::{CostWeights, TypoHandle};

/// Environment variable naming an extra JSON layout file.
pub const LAYOUT_PATH_ENV: &str = "TYPO_LAYOUT_PATH";

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Print an error chain and exit with code 1.
pub fn fatal(err: &anyhow::Error) -> ! {
    eprintln!("error: {err:#}");
    process::exit(1);
}

// ---------------------------------------------------------------------------
// Shared options
// ---------------------------------------------------------------------------

/// Layout and cost options common to every tool.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Keyboard layout to measure on
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_LAYOUT)]
    pub layout: String,

    /// JSON file with extra layouts
    #[arg(long, value_name = "FILE", env = LAYOUT_PATH_ENV)]
    pub layouts: Option<PathBuf>,

    /// JSON file with cost weights
    #[arg(long, value_name = "FILE")]
    pub costs: Option<PathBuf>,

    /// Print the registered layout names and exit
    #[arg(long)]
    pub list_layouts: bool,
}

impl LayoutArgs {
    /// Built-in layouts plus whatever the options add.
    pub fn build_handle(&self) -> Result<TypoHandle> {
        let mut handle = TypoHandle::new();
        if let Some(path) = &self.layouts {
            let names = handle
                .load_layouts(path)
                .with_context(|| format!("loading layouts from {}", path.display()))?;
            tracing::info!(count = names.len(), path = %path.display(), "loaded extra layouts");
        }
        if let Some(path) = &self.costs {
            let weights = CostWeights::load_file(path)
                .with_context(|| format!("loading cost weights from {}", path.display()))?;
            handle.set_cost_weights(weights)?;
        }
        // fail on a bad --layout before any input is read
        handle.layout(&self.layout)?;
        Ok(handle)
    }
}

/// Write one registered layout name per line.
pub fn list_layouts(handle: &TypoHandle, out: &mut impl Write) -> Result<()> {
    for name in handle.registry().names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// typo-distance
// ---------------------------------------------------------------------------

/// Keyboard-aware typo distance from SOURCE to each TARGET
#[derive(Parser, Debug)]
#[command(name = "typo-distance", version)]
#[command(after_help = "With no TARGET, targets are read from stdin, one per line.")]
pub struct DistanceArgs {
    #[command(flatten)]
    pub common: LayoutArgs,

    /// Intended word
    #[arg(required_unless_present = "list_layouts")]
    pub source: Option<String>,

    /// Typed words to compare against SOURCE
    pub targets: Vec<String>,
}

/// Print `TARGET<TAB>distance` for every target.
pub fn run_distance(args: &DistanceArgs, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let handle = args.common.build_handle()?;
    if args.common.list_layouts {
        return list_layouts(&handle, out);
    }
    let Some(source) = args.source.as_deref() else {
        bail!("missing SOURCE");
    };
    let layout = args.common.layout.as_str();

    let mut measure = |target: &str| -> Result<()> {
        let d = handle
            .distance(source, target, layout)
            .with_context(|| format!("measuring {source:?} -> {target:?}"))?;
        writeln!(out, "{target}\t{d}")?;
        Ok(())
    };

    if args.targets.is_empty() {
        for line in input.lines() {
            let line = line.context("reading stdin")?;
            let target = line.trim();
            if target.is_empty() {
                continue;
            }
            measure(target)?;
        }
    } else {
        for target in &args.targets {
            measure(target)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// typo-generate
// ---------------------------------------------------------------------------

/// Every word reachable from SOURCE by keyboard typos within a cost budget
#[derive(Parser, Debug)]
#[command(name = "typo-generate", version)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: LayoutArgs,

    /// Maximum total edit cost
    #[arg(short, long, value_name = "B", default_value_t = 1.0)]
    pub budget: f64,

    /// Stop after N candidates
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Skip candidates whose text was already printed
    #[arg(short, long)]
    pub unique: bool,

    /// Print each candidate's cost after a tab
    #[arg(short = 'c', long)]
    pub with_costs: bool,

    /// Word to generate typos of
    #[arg(required_unless_present = "list_layouts")]
    pub source: Option<String>,
}

/// Print the candidates for SOURCE, one per line.
pub fn run_generate(args: &GenerateArgs, out: &mut impl Write) -> Result<()> {
    let handle = args.common.build_handle()?;
    if args.common.list_layouts {
        return list_layouts(&handle, out);
    }
    let Some(source) = args.source.as_deref() else {
        bail!("missing SOURCE");
    };

    let candidates = handle.generate(source, args.budget, &args.common.layout)?;
    let mut seen = HashSet::new();
    let mut printed = 0usize;
    for candidate in candidates.with_costs() {
        if args.limit.is_some_and(|limit| printed >= limit) {
            break;
        }
        let candidate = candidate.with_context(|| format!("generating typos of {source:?}"))?;
        if args.unique && !seen.insert(candidate.text.clone()) {
            continue;
        }
        if args.with_costs {
            writeln!(out, "{}\t{}", candidate.text, candidate.cost)?;
        } else {
            writeln!(out, "{}", candidate.text)?;
        }
        printed += 1;
    }
    tracing::debug!(printed, "generation done");
    Ok(())
}
