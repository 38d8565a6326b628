// typo-generate: List the words reachable from SOURCE by keyboard typos.
//
// Candidates come out in search order with SOURCE first. The same word can
// appear more than once when different edits produce it; --unique hides the
// repeats.
//
// Usage:
//   typo-generate [OPTIONS] SOURCE
//
// Options:
//   -b, --budget B         Maximum total edit cost (default: 1)
//   -n, --limit N          Stop after N candidates
//   -u, --unique           Skip repeated words
//   -c, --with-costs       Print each candidate's cost
//   -l, --layout NAME      Keyboard layout (default: QWERTY)
//       --layouts FILE     JSON file with extra layouts (env: TYPO_LAYOUT_PATH)
//       --costs FILE       JSON file with cost weights
//       --list-layouts     Print the registered layout names

use std::io::{self, Write};

use clap::Parser;
use typo_cli::GenerateArgs;

fn main() {
    typo_cli::init_tracing();
    let args = GenerateArgs::parse();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = typo_cli::run_generate(&args, &mut out).and_then(|()| Ok(out.flush()?));
    if let Err(e) = result {
        typo_cli::fatal(&e);
    }
}
