//! add-snippet — scaffold a C++ header snippet and its Catch2 test stub.
//!
//! `add-snippet union_find` writes `src/union_find.hpp` and `test/test_union_find.cpp`
//! and refuses to overwrite either. All the work happens in
//! [`hsc_snippets_core::scaffold`]; this crate only parses arguments and prints.

mod add;
mod output;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "add-snippet",
    about = "Scaffold src/<NAME>.hpp and test/test_<NAME>.cpp from the snippet templates",
    version
)]
struct Cli {
    /// Snippet name: ASCII letters, digits and underscores
    name: String,

    /// Directory containing src/ and test/
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Write both files or neither (by default a test stub collision leaves the new header in place)
    #[arg(long)]
    atomic: bool,

    /// Print the files that would be written without touching the filesystem
    #[arg(long, conflicts_with = "atomic")]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.dry_run {
        add::dry_run(&cli.root, &cli.name)
    } else {
        add::run(&cli.root, &cli.name, cli.atomic)
    }
}
