// typo-distance: Keyboard-aware typo distance between words.
//
// Prints one `TARGET<TAB>distance` line per target. Lower means the target
// is a more plausible mistyping of SOURCE.
//
// Usage:
//   typo-distance [OPTIONS] SOURCE [TARGET...]
//   echo rlephants | typo-distance elephants
//
// Options:
//   -l, --layout NAME      Keyboard layout (default: QWERTY)
//       --layouts FILE     JSON file with extra layouts (env: TYPO_LAYOUT_PATH)
//       --costs FILE       JSON file with cost weights
//       --list-layouts     Print the registered layout names

use std::io::{self, Write};

use clap::Parser;
use typo_cli::DistanceArgs;

fn main() {
    typo_cli::init_tracing();
    let args = DistanceArgs::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = typo_cli::run_distance(&args, stdin.lock(), &mut out).and_then(|()| Ok(out.flush()?));
    if let Err(e) = result {
        typo_cli::fatal(&e);
    }
}
