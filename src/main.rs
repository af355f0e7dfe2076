mod args;
mod export;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use crate::args::Args;
use crate::export::config_reader::ExportSettings;
use crate::export::{run_export, ExportError};

fn usage(program: &str) {
    eprintln!(
        "[Usage]: {} <input file path> [<output file path>] (see --help for the options)",
        program
    );
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }
    debug!("args: {:?}", args);

    let settings = match ExportSettings::from_args(&args) {
        Ok(s) => s,
        Err(e) => {
            if let ExportError::MissingInput {} = *e {
                error!("An input file path was not provided");
                let program = std::env::args().next().unwrap_or_else(|| "rcexport".to_string());
                usage(&program);
            } else {
                eprintln!("An error occured {}", e);
            }
            std::process::exit(1);
        }
    };

    match run_export(&settings) {
        Ok(summary) => {
            info!(
                "Exported {} records from {} rows ({} rows skipped)",
                summary.records,
                summary.rows,
                summary.skipped.len()
            );
        }
        Err(e) => {
            error!("Export failed: {:?}", e);
            eprintln!("An error occured {}", e);
            std::process::exit(1);
        }
    }
}
