use tree_sitter::Node;

use crate::analysis::{method, walk};
use crate::report::MethodRecord;

/// Structural facts about the class definitions in one file.
#[derive(Debug, Default)]
pub struct ClassFacts {
    pub class_name: String,
    pub host_name: String,
    pub methods: Vec<MethodRecord>,
}

/// Extract class facts by visiting every class definition in walk order.
///
/// Deliberately last-write-wins: each visited class overwrites `class_name`
/// (and `host_name` when it yields one) while methods accumulate across all
/// visited classes into one flat list. Scraper files carry a single class, so
/// in practice this never fires; the multi-class behavior is kept as-is and
/// pinned by tests rather than changed under the consumers of the report.
pub fn extract_classes(root: Node, source: &str) -> ClassFacts {
    let mut facts = ClassFacts::default();

    walk::preorder(root, &mut |node| {
        if !walk::is_class_definition(&node) {
            return;
        }
        if let Some(name) = node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
        {
            facts.class_name = name.to_string();
        }
        let Some(body) = node.child_by_field_name("body") else {
            return;
        };
        let mut cursor = body.walk();
        for item in body.named_children(&mut cursor) {
            let Some((scan_root, func)) = as_method(item) else {
                continue;
            };
            let record = method::analyze_method(scan_root, func, source);
            if record.name == "host" {
                if let Some(host) = extract_host_name(scan_root, source) {
                    facts.host_name = host;
                }
            }
            facts.methods.push(record);
        }
    });

    facts
}

/// Direct-child methods only; a decorated method is unwrapped to its inner
/// function definition. Nested helpers inside a method body are not methods,
/// and neither are `async def`s (Python's AST gives those a distinct node
/// kind that the original tool never matched).
fn as_method(item: Node) -> Option<(Node, Node)> {
    let (scan_root, def) = match item.kind() {
        "function_definition" => (item, item),
        "decorated_definition" => (item, item.child_by_field_name("definition")?),
        _ => return None,
    };
    let is_async = def.child(0).map(|c| c.kind()) == Some("async");
    (walk::is_function_definition(&def) && !is_async).then_some((scan_root, def))
}

/// The first `return` of a plain string literal anywhere in the `host`
/// method decides the host name. An empty literal decides nothing, matching
/// the original tool's truthiness check, and ends the search all the same.
fn extract_host_name(method: Node, source: &str) -> Option<String> {
    let ret = walk::find_preorder(method, &|node| {
        node.kind() == "return_statement"
            && node
                .named_child(0)
                .and_then(|value| walk::string_literal_value(value, source))
                .is_some()
    })?;
    let value = walk::string_literal_value(ret.named_child(0)?, source)?;
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parser::parse_source;
    use crate::report::ReturnType;
    use pretty_assertions::assert_eq;

    fn facts_of(source: &str) -> ClassFacts {
        let tree = parse_source("test.py", source).unwrap();
        extract_classes(tree.root_node(), source)
    }

    #[test]
    fn test_no_class_yields_empty_facts() {
        let facts = facts_of("def lonely():\n    return 1\n");
        assert_eq!(facts.class_name, "");
        assert_eq!(facts.host_name, "");
        assert!(facts.methods.is_empty());
    }

    #[test]
    fn test_class_name_host_and_methods() {
        let facts = facts_of(
            "\
class FooScraper:
    def host(self):
        return \"foo.com\"

    def ingredients(self):
        return soup.select(\".recipe-ingredient\")
",
        );
        assert_eq!(facts.class_name, "FooScraper");
        assert_eq!(facts.host_name, "foo.com");
        assert_eq!(facts.methods.len(), 2);
        assert_eq!(facts.methods[0].name, "host");
        let ingredients = &facts.methods[1];
        assert_eq!(ingredients.name, "ingredients");
        assert_eq!(ingredients.return_type, ReturnType::StringArray);
        assert_eq!(ingredients.selectors, vec![".recipe-ingredient"]);
    }

    #[test]
    fn test_multiple_classes_last_write_wins_with_merged_methods() {
        let facts = facts_of(
            "\
class First:
    def host(self):
        return \"first.com\"

class Second:
    def title(self):
        return \"t\"
",
        );
        // Identity fields reflect the last visited class; its host (absent
        // here) leaves the earlier one standing. Methods merge flat.
        assert_eq!(facts.class_name, "Second");
        assert_eq!(facts.host_name, "first.com");
        let names: Vec<&str> = facts.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["host", "title"]);
    }

    #[test]
    fn test_second_host_overwrites_first() {
        let facts = facts_of(
            "\
class First:
    def host(self):
        return \"first.com\"

class Second:
    def host(self):
        return \"second.com\"
",
        );
        assert_eq!(facts.host_name, "second.com");
    }

    #[test]
    fn test_host_requires_plain_string_return() {
        let facts = facts_of(
            "\
class Dyn:
    def host(self, domain=\"dyn.com\"):
        return f\"www.{domain}\"
",
        );
        assert_eq!(facts.host_name, "");
    }

    #[test]
    fn test_host_first_string_return_wins() {
        let facts = facts_of(
            "\
class Branchy:
    def host(self):
        if self.alt:
            return \"alt.example.com\"
        return \"example.com\"
",
        );
        assert_eq!(facts.host_name, "alt.example.com");
    }

    #[test]
    fn test_nested_helpers_are_not_methods() {
        let facts = facts_of(
            "\
class Foo:
    def instructions(self):
        def clean(s):
            return s
        return clean
",
        );
        let names: Vec<&str> = facts.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["instructions"]);
    }

    #[test]
    fn test_async_defs_are_not_methods() {
        let facts = facts_of(
            "\
class Foo:
    async def fetch(self):
        return await self.client.get(\"#page\")

    def title(self):
        return \"t\"
",
        );
        let names: Vec<&str> = facts.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["title"]);
    }

    #[test]
    fn test_decorated_method_is_a_method() {
        let facts = facts_of(
            "\
class Foo:
    @staticmethod
    def host():
        return \"foo.com\"
",
        );
        assert_eq!(facts.methods.len(), 1);
        assert_eq!(facts.methods[0].name, "host");
        assert_eq!(facts.host_name, "foo.com");
        // Body span starts at the def line, not the decorator.
        assert!(facts.methods[0].body.starts_with("    def host():"));
    }
}
