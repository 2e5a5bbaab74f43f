use clap::Parser;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use keydiff::{
    create_formatter, diff_records, load_records, load_records_reader, KeyDiffError,
};

mod cli;

/// Environment variable holding the log filter
const LOG_ENV: &str = "KEYDIFF_LOG";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), KeyDiffError> {
    let args = cli::Args::parse();
    init_tracing(args.verbose);
    args.validate()?;

    let options = args.record_options()?;
    let load_config = args.load_config();

    let before = load_records(&args.before, &load_config, args.inline)?;
    let after = match &args.after {
        Some(after) => load_records(after, &load_config, args.inline)?,
        None => load_records_reader(std::io::stdin().lock(), &load_config)?,
    };
    debug!(before = before.len(), after = after.len(), "records loaded");

    let changes = diff_records(&before, &after, &options)?;

    let formatter = create_formatter(args.format, args.sort);
    let output = formatter.format(&changes)?;

    println!("{}", output);

    Ok(())
}

/// Send logs to stderr so stdout stays parseable
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
