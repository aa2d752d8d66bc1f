use crate::report::{ComplexityTier, MethodRecord, ParsingStrategy};

/// File-level tier from total method complexity and method count. Strict
/// thresholds, complex checked first: 20 total / 15 methods are still medium.
pub fn complexity_tier(methods: &[MethodRecord]) -> ComplexityTier {
    let total_complexity: u32 = methods.iter().map(|m| m.complexity).sum();
    let method_count = methods.len();

    if total_complexity > 20 || method_count > 15 {
        ComplexityTier::Complex
    } else if total_complexity > 10 || method_count > 8 {
        ComplexityTier::Medium
    } else {
        ComplexityTier::Simple
    }
}

/// Strategy from a whole-file textual signal plus the selector count. The
/// schema-property total is computed but does not participate in the
/// decision; the raw "schema"/"json" substring test stands in for it.
pub fn parsing_strategy(methods: &[MethodRecord], content: &str) -> ParsingStrategy {
    let _schema_property_count: usize =
        methods.iter().map(|m| m.schema_properties.len()).sum();
    let selector_count: usize = methods.iter().map(|m| m.selectors.len()).sum();

    let lowered = content.to_lowercase();
    if lowered.contains("schema") || lowered.contains("json") {
        if selector_count > 0 {
            ParsingStrategy::Mixed
        } else {
            ParsingStrategy::Schema
        }
    } else {
        ParsingStrategy::Selectors
    }
}
