use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::analysis::{classifier, extractor, imports, parser};
use crate::report::AnalysisReport;
use crate::utils::AnalyzeError;

/// Run the full pipeline on a file: read, parse, extract, classify.
pub fn analyze_file(path: &Path) -> Result<AnalysisReport> {
    let content = fs::read_to_string(path)
        .map_err(AnalyzeError::Io)
        .with_context(|| format!("failed to read {}", path.display()))?;
    analyze_source(&path.display().to_string(), &content)
}

/// Analyze already-loaded source text. `file_path` is echoed verbatim into
/// the report.
pub fn analyze_source(file_path: &str, content: &str) -> Result<AnalysisReport> {
    let tree = parser::parse_source(file_path, content)?;
    let root = tree.root_node();
    debug!(path = file_path, "parsed source");

    let imports = imports::collect_imports(root, content);
    let facts = extractor::extract_classes(root, content);
    debug!(
        class = %facts.class_name,
        methods = facts.methods.len(),
        imports = imports.len(),
        "extracted structure"
    );

    let complexity = classifier::complexity_tier(&facts.methods);
    let parsing_strategy = classifier::parsing_strategy(&facts.methods, content);

    Ok(AnalysisReport {
        class_name: facts.class_name,
        host_name: facts.host_name,
        methods: facts.methods,
        imports,
        complexity,
        parsing_strategy,
        file_path: file_path.to_string(),
    })
}
