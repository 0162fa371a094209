/// MNO command-line tool: scan, validate, summarise, and dump the MNO
/// records in large ASCII exports.
///
/// # Command overview
///
/// ```text
/// mno <COMMAND> [OPTIONS]
///
/// Commands:
///   scan       Decode every record and report counts and throughput
///   validate   Check that every MNO line decodes
///   stats      Print record counts and value statistics
///   dump       Write decoded records back out as text
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Increase log verbosity (repeat for more)
///   -q, --quiet      Disable logging entirely
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                       |
/// |------|-----------------------------------------------|
/// | 0    | Success                                       |
/// | 1    | Error (I/O failure, malformed record, etc.)   |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_dump;
mod cmd_scan;
mod cmd_stats;
mod cmd_validate;
mod input;

use input::Strategy;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The MNO record scanner.
#[derive(Parser)]
#[command(name = "mno", version, about = "Zero-copy MNO record scanner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging entirely.
    #[arg(short, long, global = true)]
    quiet: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode every record and report counts and throughput.
    Scan(ScanArgs),
    /// Check that every MNO line in a file decodes.
    Validate(ValidateArgs),
    /// Print record counts and value statistics.
    Stats(StatsArgs),
    /// Write decoded records back out as text.
    Dump(DumpArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Input selection shared by every command.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────────────┐
/// │ Flag          │ Effect                                               │
/// ├───────────────┼──────────────────────────────────────────────────────┤
/// │ --strategy    │ streaming (default): buffered reads from the file    │
/// │               │ mapped: memory-map the whole file                    │
/// │ --buffer-size │ initial streaming buffer size in bytes (default 4096)│
/// └───────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to the input file.
    pub file: PathBuf,

    /// How the file is read.
    #[arg(long, value_enum, default_value = "streaming")]
    pub strategy: Strategy,

    /// Initial streaming buffer size in bytes. The buffer doubles as
    /// needed; ignored by the mapped strategy.
    #[arg(long, default_value_t = mno_scanner::DEFAULT_BUFFER_CAPACITY)]
    pub buffer_size: usize,
}

/// Arguments for `mno scan`.
#[derive(clap::Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for `mno validate`.
///
/// Decodes the whole file and prints a `✓` report, or a `✗` diagnostic
/// naming the first line that failed. Exits with code 1 on failure.
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for `mno stats`.
#[derive(clap::Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for `mno dump`.
///
/// Each record is written as `MNO,<e>,<v>,<t>,<m>,<value>` on its own
/// line, so the output is itself a valid input file. Untagged lines are
/// not copied.
#[derive(clap::Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write records to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Scan(args) => cmd_scan::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Stats(args) => cmd_stats::run(&args),
        Commands::Dump(args) => cmd_dump::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install `env_logger`. `RUST_LOG` overrides the level chosen by `-v`.
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
