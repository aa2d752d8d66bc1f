use thiserror::Error;

/// Failure kinds the analysis pipeline can produce. There is no recovery
/// path: every variant propagates to the top level and ends the run.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("syntax error in {path} at line {line}, column {column}")]
    Syntax {
        path: String,
        line: usize,
        column: usize,
    },

    #[error("parser produced no tree for {0}")]
    Parse(String),

    #[error("grammar error: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}
