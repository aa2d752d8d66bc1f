use tree_sitter::Node;

use crate::analysis::walk;

/// Collect every imported module/symbol path in first-encountered order.
/// Duplicates are kept; the downstream triage tool wants the raw sequence.
///
/// `import a as b` records `a` (the original name). `from m import x`
/// records `m.x`; a relative import with a head (`from .m import x`) resolves
/// to `m.x`, while one without (`from . import x`) contributes nothing.
pub fn collect_imports(root: Node, source: &str) -> Vec<String> {
    let mut imports = Vec::new();
    walk::preorder(root, &mut |node| match node.kind() {
        "import_statement" => {
            let mut cursor = node.walk();
            for name in node.children_by_field_name("name", &mut cursor) {
                if let Some(text) = imported_name(name, source) {
                    imports.push(text);
                }
            }
        }
        "import_from_statement" => {
            let Some(module) = module_head(node, source) else {
                return;
            };
            let mut cursor = node.walk();
            for name in node.children_by_field_name("name", &mut cursor) {
                if let Some(text) = imported_name(name, source) {
                    imports.push(format!("{module}.{text}"));
                }
            }
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if child.kind() == "wildcard_import" {
                    imports.push(format!("{module}.*"));
                }
            }
        }
        _ => {}
    });
    imports
}

/// Original (pre-alias) name of a `dotted_name` or `aliased_import` node.
fn imported_name(node: Node, source: &str) -> Option<String> {
    let name = match node.kind() {
        "dotted_name" => node,
        "aliased_import" => node.child_by_field_name("name")?,
        _ => return None,
    };
    name.utf8_text(source.as_bytes())
        .ok()
        .map(|text| text.to_string())
}

/// Dotted module head of a from-import, if one resolves.
fn module_head(node: Node, source: &str) -> Option<String> {
    let module = node.child_by_field_name("module_name")?;
    let dotted = match module.kind() {
        "dotted_name" => module,
        // `from .m import x`: the head is the dotted name after the dots,
        // `from . import x` has none and resolves to nothing.
        "relative_import" => {
            let mut cursor = module.walk();
            let dotted = module
                .children(&mut cursor)
                .find(|child| child.kind() == "dotted_name");
            dotted?
        }
        _ => return None,
    };
    dotted
        .utf8_text(source.as_bytes())
        .ok()
        .map(|text| text.to_string())
}
