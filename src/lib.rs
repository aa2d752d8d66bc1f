pub mod analysis;
pub mod cli;
pub mod report;
pub mod utils;

pub use analysis::{analyze_file, analyze_source};
pub use report::{AnalysisReport, ComplexityTier, MethodRecord, ParsingStrategy, ReturnType};
pub use utils::AnalyzeError;
