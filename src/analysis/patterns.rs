use once_cell::sync::Lazy;
use regex::Regex;

/// CSS-selector shapes: class/ID tokens, element names with an optional
/// attribute predicate, and pseudo-classes. Matching is "contains", and the
/// element-name pattern is deliberately permissive; false positives are
/// accepted, this is a triage heuristic rather than a selector validator.
static CSS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[.#][\w-]+",
        r#"[a-zA-Z][\w-]*(?:\[[\w-]+[=~|^$*]?["']?[^"']*["']?\])?"#,
        r"[a-zA-Z][\w-]*:[\w-]+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("css pattern compiles"))
    .collect()
});

/// schema.org Recipe vocabulary, in lookup order. A literal records only the
/// first entry that occurs in it.
const SCHEMA_VOCABULARY: [&str; 12] = [
    "recipeIngredient",
    "recipeInstructions",
    "totalTime",
    "cookTime",
    "prepTime",
    "recipeYield",
    "name",
    "description",
    "author",
    "image",
    "datePublished",
    "nutrition",
];

/// If `text` contains anything selector-shaped, the whole literal counts as
/// the selector.
pub fn match_css_selector(text: &str) -> Option<&str> {
    if CSS_PATTERNS.iter().any(|p| p.is_match(text)) {
        Some(text)
    } else {
        None
    }
}

/// First vocabulary entry contained in `text`, if any.
pub fn match_schema_property(text: &str) -> Option<&'static str> {
    SCHEMA_VOCABULARY
        .iter()
        .find(|entry| text.contains(**entry))
        .copied()
}
