use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;
use vi2zh_dict::{convert_file, ConvertError};

/// Convert a Vietnamese-Chinese wiki dump into a `term : definition` dictionary.
#[derive(Parser)]
#[command(name = "vi2zh-dict", version, about)]
struct Args {
    /// Tab-separated source dump (term, Chinese characters, definition)
    #[arg(default_value = "vi2zhwikitxt.txt")]
    input: PathBuf,

    /// Dictionary file to write
    #[arg(default_value = "dict.txt")]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Converting {} to {}...", args.input.display(), args.output.display());

    match convert_file(&args.input, &args.output) {
        Ok(stats) => {
            println!("\nConversion complete!");
            println!("Total lines processed: {}", stats.processed);
            println!("Successfully converted: {}", stats.converted);
            println!("Skipped (empty/invalid): {}", stats.skipped);
            println!("\nOutput written to: {}", args.output.display());
        }
        Err(e @ ConvertError::InputNotFound(_)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error during conversion: {}", e);
            process::exit(1);
        }
    }
}
