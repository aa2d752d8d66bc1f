use tree_sitter::Node;

use crate::analysis::{patterns, walk};
use crate::report::{MethodRecord, ReturnType};

/// Analyze one method. `scan_root` is the outermost node belonging to the
/// method (the decorated_definition when decorators are present, so that
/// decorator expressions are scanned like the rest of the method subtree);
/// `func` is the function_definition itself, which supplies the name and the
/// body span.
pub fn analyze_method(scan_root: Node, func: Node, source: &str) -> MethodRecord {
    let name = func
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
        .unwrap_or_default()
        .to_string();

    let mut selectors = Vec::new();
    let mut schema_properties = Vec::new();
    let mut branchy: u32 = 0;
    let mut calls: u32 = 0;

    walk::preorder(scan_root, &mut |node| {
        if walk::is_conditional(&node)
            || walk::is_loop(&node)
            || walk::is_exception_handler(&node)
        {
            branchy += 1;
        } else if walk::is_call_expression(&node) {
            calls += 1;
        } else if let Some(literal) = walk::string_literal_value(node, source) {
            if let Some(selector) = patterns::match_css_selector(&literal) {
                selectors.push(selector.to_string());
            }
            if let Some(property) = patterns::match_schema_property(&literal) {
                schema_properties.push(property.to_string());
            }
        }
    });

    MethodRecord {
        return_type: ReturnType::from_method_name(&name),
        name,
        selectors,
        schema_properties,
        // Calls weigh half a point each; integer division truncates toward
        // zero like the original's int() cast.
        complexity: branchy + calls / 2,
        body: body_span(func, source),
    }
}

/// Verbatim source text from the method's first line to its last line,
/// inclusive.
fn body_span(func: Node, source: &str) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let start = func.start_position().row;
    if start >= lines.len() {
        return String::new();
    }
    let end = func.end_position().row.min(lines.len() - 1);
    lines[start..=end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parser::parse_source;
    use pretty_assertions::assert_eq;

    fn first_method(source: &str) -> MethodRecord {
        let tree = parse_source("test.py", source).unwrap();
        let func = walk::find_preorder(tree.root_node(), &walk::is_function_definition)
            .expect("source contains a function");
        analyze_method(func, func, source)
    }

    #[test]
    fn test_selector_and_schema_scan() {
        let record = first_method(
            "def ingredients(self):\n    return self.soup.select(\".recipe-ingredient\")\n",
        );
        assert_eq!(record.name, "ingredients");
        assert_eq!(record.return_type, ReturnType::StringArray);
        assert_eq!(record.selectors, vec![".recipe-ingredient"]);
        assert_eq!(record.schema_properties, Vec::<String>::new());
    }

    #[test]
    fn test_literal_recorded_by_both_scans() {
        let record =
            first_method("def title(self):\n    return self.soup.find(\"[itemprop=name]\")\n");
        assert_eq!(record.selectors, vec!["[itemprop=name]"]);
        assert_eq!(record.schema_properties, vec!["name"]);
    }

    #[test]
    fn test_complexity_score() {
        // 1 if + 1 elif + 1 for + 1 try = 4; 5 calls * 0.5 = 2.5, truncated.
        let record = first_method(
            "\
def total_time(self):
    if self.a():
        self.b()
    elif self.c():
        pass
    for x in self.items():
        try:
            self.d()
        except ValueError:
            pass
    return 0
",
        );
        assert_eq!(record.complexity, 6);
        assert_eq!(record.return_type, ReturnType::Number);
    }

    #[test]
    fn test_call_half_weights_truncate() {
        let record = first_method("def title(self):\n    return clean(self.soup.find(\"h1\").text)\n");
        // 2 calls -> 1.0
        assert_eq!(record.complexity, 1);
        let record =
            first_method("def author(self):\n    return a(b(), c())\n");
        // 3 calls -> 1.5, truncated
        assert_eq!(record.complexity, 1);
    }

    #[test]
    fn test_body_is_verbatim_span() {
        let source = "import re\n\n\ndef title(self):\n    # grab it\n    return \"x\"\n";
        let record = first_method(source);
        assert_eq!(record.body, "def title(self):\n    # grab it\n    return \"x\"");
    }

    #[test]
    fn test_nested_function_literals_are_scanned() {
        let record = first_method(
            "\
def instructions(self):
    def clean(step):
        return step.select(\".step-text\")
    return clean
",
        );
        assert_eq!(record.selectors, vec![".step-text"]);
    }

    #[test]
    fn test_escape_only_literals_are_not_selectors() {
        // "\n" cooks to a newline, which has no letter and matches no
        // selector shape; only the real selector is recorded.
        let record = first_method(
            "\
def instructions(self):
    steps = self.soup.select(\"div[itemprop=recipeInstructions] p\")
    return \"\\n\".join(s.text for s in steps)
",
        );
        assert_eq!(record.selectors, vec!["div[itemprop=recipeInstructions] p"]);
    }

    #[test]
    fn test_fstring_interpolations_are_not_literals() {
        let record = first_method(
            "def image(self):\n    return f\".thumb-{self.size}\"\n",
        );
        assert_eq!(record.selectors, Vec::<String>::new());
    }
}
