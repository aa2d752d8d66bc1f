use anyhow::Result;
use tree_sitter::{Node, Parser, Tree};

use crate::analysis::walk;
use crate::utils::AnalyzeError;

/// Parse Python source text into a syntax tree, failing fast on malformed
/// syntax. tree-sitter never refuses input outright; it marks ERROR/MISSING
/// nodes instead, so a tree containing any is rejected here. No partial
/// results escape a failed parse.
pub fn parse_source(path: &str, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(AnalyzeError::Language)?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AnalyzeError::Parse(path.to_string()))?;

    if tree.root_node().has_error() {
        let pos = first_error_node(tree.root_node())
            .map(|n| n.start_position())
            .unwrap_or(tree_sitter::Point { row: 0, column: 0 });
        return Err(AnalyzeError::Syntax {
            path: path.to_string(),
            line: pos.row + 1,
            column: pos.column + 1,
        }
        .into());
    }

    Ok(tree)
}

fn first_error_node(root: Node) -> Option<Node> {
    walk::find_preorder(root, &|node| node.is_error() || node.is_missing())
}
