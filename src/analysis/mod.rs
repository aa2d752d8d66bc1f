// Gateway module for analysis - follows the Train Station Pattern
// All external access must go through this gateway

mod analyzer;
mod classifier;
mod extractor;
mod imports;
mod method;
mod parser;
mod patterns;
mod walk;

pub use analyzer::{analyze_file, analyze_source};
