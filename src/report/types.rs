use serde::Serialize;

/// Full analysis record for one scraper file.
///
/// Field order matters: the compact JSON emitted on stdout carries keys in
/// declaration order, and downstream triage tooling relies on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Name of the last class definition visited (empty if the file has none).
    pub class_name: String,
    /// Literal returned by the `host` method (empty if undetermined).
    pub host_name: String,
    /// Methods of every visited class, in source order.
    pub methods: Vec<MethodRecord>,
    /// Dotted import paths in first-encountered order, duplicates kept.
    pub imports: Vec<String>,
    pub complexity: ComplexityTier,
    pub parsing_strategy: ParsingStrategy,
    pub file_path: String,
}

/// Per-method facts extracted by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub name: String,
    pub return_type: ReturnType,
    /// String literals that look like CSS selectors, in scan order.
    pub selectors: Vec<String>,
    /// schema.org Recipe vocabulary terms found in string literals.
    pub schema_properties: Vec<String>,
    /// Structural complexity score (branches/loops/try + half per call,
    /// truncated toward zero).
    pub complexity: u32,
    /// Verbatim source text of the method, first line to last line.
    pub body: String,
}

/// File-level complexity tier derived from per-method scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Simple,
    Medium,
    Complex,
}

/// How the scraper extracts data: embedded structured data, DOM selectors,
/// or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsingStrategy {
    Schema,
    Selectors,
    Mixed,
}

/// Return type inferred purely from the method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ReturnType {
    #[default]
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string[]")]
    StringArray,
    #[serde(rename = "number")]
    Number,
}

impl ReturnType {
    /// Infer the return type from a method name. `ingredients` and
    /// `instructions` yield lists; the timing methods yield numbers;
    /// everything else is a plain string.
    pub fn from_method_name(name: &str) -> Self {
        match name {
            "ingredients" | "instructions" => ReturnType::StringArray,
            "total_time" | "cook_time" | "prep_time" => ReturnType::Number,
            _ => ReturnType::String,
        }
    }
}
