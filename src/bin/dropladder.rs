//! dropladder CLI — find ladders of words formed by letter-dropping.
//!
//! Usage:
//!   dropladder [-d FILE] [--format text|json] [--tie-break discovery|lexical]
//!              [--min-length N] [-v...]

use clap::{ArgAction, Parser};
use dropladder::{
    find_ladders, write_report, Dictionary, LadderConfig, OutputFormat, TieBreak,
    DEFAULT_DICTIONARY_PATH, MIN_LADDER_LENGTH,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dropladder",
    version,
    about = "Find ladders of words formed by letter-dropping"
)]
struct Cli {
    /// Dictionary file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DICTIONARY_PATH)]
    dict: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Order among ladders of equal length
    #[arg(long, value_enum, default_value_t = TieBreak::Discovery)]
    tie_break: TieBreak,
    /// Leave out ladders with fewer words than this
    #[arg(long, value_name = "N", default_value_t = MIN_LADDER_LENGTH)]
    min_length: usize,
    /// More log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    init_logging(cli.verbose);

    let dictionary = match Dictionary::load(&cli.dict) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let config = LadderConfig::new()
        .with_tie_break(cli.tie_break)
        .with_min_length(cli.min_length);
    let report = find_ladders(&dictionary, &config);
    tracing::info!(chains = report.count, longest = report.longest(), "done");

    if let Err(e) = write_report(&report, cli.format, BufWriter::new(io::stdout().lock())) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
