use std::sync::LazyLock;

use regex::Regex;

/// Leading amount: whole, decimal, fraction, mixed number, range or a
/// unicode vulgar fraction.
const QUANTITY: &str = r"(?:\d+(?:\s+\d+/\d+|[./]\d+)?(?:\s*-\s*\d+(?:[./]\d+)?)?|[½¼¾⅓⅔⅛])";

const UNITS: &str = r"g|kg|ml|l|oz|lb|cups?|tbsp|tsp|tablespoons?|teaspoons?|bunch|head|cloves?|pieces?|slices?|handful|pinch";

static QUANTITY_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^{QUANTITY}\s*(?:{UNITS})\b\.?\s*"))
        .expect("quantity with unit pattern")
});

static BARE_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{QUANTITY}\s*")).expect("bare quantity pattern"));

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Strip the amount, unit and parenthetical notes from an ingredient mention.
///
/// `"2 cups spinach (washed)"` becomes `"spinach"`. Only one leading amount is
/// removed; when it is not followed by a known unit the bare amount is still
/// dropped (`"2 eggs"` becomes `"eggs"`). The result may be empty.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();

    let without_amount = match QUANTITY_WITH_UNIT.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => match BARE_QUANTITY.find(trimmed) {
            Some(m) => &trimmed[m.end()..],
            None => trimmed,
        },
    };

    let without_notes = PARENTHETICAL.replace_all(without_amount, " ");

    WHITESPACE.replace_all(&without_notes, " ").trim().to_owned()
}

/// Uppercase the first character, leave the rest untouched.
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
