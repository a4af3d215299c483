use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::Result;
use std::path::PathBuf;

use colstats::{read_values, summarize};

/// Report average/min/max of the second column of a whitespace-delimited file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the input file
    file_path: PathBuf,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    // A bad invocation prints the usage line and still exits 0; only
    // --help/--version get clap's own output.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("Usage: colstats <file_path>");
            return Ok(());
        }
    };

    // A missing or unreadable file degrades to an empty dataset, not a crash.
    let values = match read_values(&cli.file_path) {
        Ok(values) => values,
        Err(err) => {
            println!("{err}");
            Vec::new()
        }
    };

    match summarize(&values) {
        Some(summary) => println!("{summary}"),
        None => println!("No valid data found in the file."),
    }

    Ok(())
}
