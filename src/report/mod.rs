// Gateway module for report types - follows the Train Station Pattern
// All external access must go through this gateway

mod types;

pub use types::{AnalysisReport, ComplexityTier, MethodRecord, ParsingStrategy, ReturnType};
