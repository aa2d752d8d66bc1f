use anyhow::Result;
use clap::Parser;

use scraper_analyzer::{analysis, cli::Cli, utils::init_logger};

fn main() -> Result<()> {
    // Parse CLI arguments; clap exits non-zero with a usage message on a
    // wrong argument count before any file is read.
    let cli = Cli::parse();

    // Set up logging if verbose
    if cli.verbose {
        init_logger();
    }

    // One compact JSON line on stdout; any read/parse failure propagates out
    // of main for a non-zero exit with the diagnostic on stderr.
    let report = analysis::analyze_file(&cli.file)?;
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}
