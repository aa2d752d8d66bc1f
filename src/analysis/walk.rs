use tree_sitter::Node;

/// Visit `node` and every descendant in pre-order, depth-first, matching
/// declaration order in the source.
pub fn preorder<'tree>(node: Node<'tree>, visit: &mut impl FnMut(Node<'tree>)) {
    visit(node);
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            preorder(cursor.node(), visit);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
}

/// First node in pre-order (including `node` itself) satisfying `pred`.
pub fn find_preorder<'tree>(
    node: Node<'tree>,
    pred: &impl Fn(&Node<'tree>) -> bool,
) -> Option<Node<'tree>> {
    if pred(&node) {
        return Some(node);
    }
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            if let Some(found) = find_preorder(cursor.node(), pred) {
                return Some(found);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    None
}

// Node-kind predicates. Python's AST nests `elif` as another If node, so an
// elif_clause counts as a conditional in its own right.

pub fn is_conditional(node: &Node) -> bool {
    matches!(node.kind(), "if_statement" | "elif_clause")
}

pub fn is_loop(node: &Node) -> bool {
    matches!(node.kind(), "while_statement" | "for_statement")
}

pub fn is_exception_handler(node: &Node) -> bool {
    node.kind() == "try_statement"
}

pub fn is_call_expression(node: &Node) -> bool {
    node.kind() == "call"
}

pub fn is_string_literal(node: &Node) -> bool {
    node.kind() == "string"
}

pub fn is_class_definition(node: &Node) -> bool {
    node.kind() == "class_definition"
}

pub fn is_function_definition(node: &Node) -> bool {
    node.kind() == "function_definition"
}

/// Unquoted, cooked value of a plain string literal. Returns None for
/// non-string nodes, for f-strings and bytes literals, and for anything
/// containing interpolations; Python's AST models all of those as something
/// other than a plain Str. Escape sequences decode to their character values
/// so that `"\n"` is a newline, not a backslash and a letter.
pub fn string_literal_value(node: Node, source: &str) -> Option<String> {
    if !is_string_literal(&node) {
        return None;
    }
    let mut value = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "interpolation" => return None,
            "string_start" => {
                let prefix = child.utf8_text(source.as_bytes()).ok()?.to_ascii_lowercase();
                if prefix.contains('f') || prefix.contains('b') {
                    return None;
                }
            }
            "string_content" => value.push_str(&cooked_content(child, source)?),
            _ => {}
        }
    }
    Some(value)
}

/// Content text with escape_sequence children decoded in place. Raw strings
/// carry no escape_sequence nodes, so their text passes through untouched.
fn cooked_content(content: Node, source: &str) -> Option<String> {
    let mut cooked = String::new();
    let mut pos = content.start_byte();
    let mut cursor = content.walk();
    for child in content.children(&mut cursor) {
        if child.kind() != "escape_sequence" {
            continue;
        }
        cooked.push_str(source.get(pos..child.start_byte())?);
        cooked.push_str(&decode_escape(child.utf8_text(source.as_bytes()).ok()?));
        pos = child.end_byte();
    }
    cooked.push_str(source.get(pos..content.end_byte())?);
    Some(cooked)
}

/// Decode one Python escape sequence. Unknown escapes stay verbatim, which
/// is what Python itself does with them.
fn decode_escape(text: &str) -> String {
    let Some(rest) = text.strip_prefix('\\') else {
        return text.to_string();
    };
    let mut chars = rest.chars();
    let decoded = match chars.next() {
        Some('n') => Some('\n'),
        Some('t') => Some('\t'),
        Some('r') => Some('\r'),
        Some('a') => Some('\x07'),
        Some('b') => Some('\x08'),
        Some('f') => Some('\x0c'),
        Some('v') => Some('\x0b'),
        Some('\\') => Some('\\'),
        Some('\'') => Some('\''),
        Some('"') => Some('"'),
        // Backslash-newline is a line continuation and contributes nothing.
        Some('\n') | Some('\r') => return String::new(),
        Some('x') | Some('u') | Some('U') => u32::from_str_radix(chars.as_str(), 16)
            .ok()
            .and_then(char::from_u32),
        Some('0'..='7') => u32::from_str_radix(rest, 8).ok().and_then(char::from_u32),
        _ => None,
    };
    match decoded {
        Some(c) => c.to_string(),
        None => text.to_string(),
    }
}
