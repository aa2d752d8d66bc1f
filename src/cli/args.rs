use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scraper-analyzer")]
#[command(version)]
#[command(about = "Analyze a recipe scraper class and report its structure as JSON", long_about = None)]
pub struct Cli {
    /// Path to the scraper source file to analyze
    pub file: PathBuf,

    /// Verbose output (logs go to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
