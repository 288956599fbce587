//! Shared case-conversion functions for identifier synthesis.

/// Split a raw name into lowercase word tokens.
///
/// Boundaries are non-alphanumeric characters and lowercase-to-uppercase
/// transitions, so `"order-management"`, `"orderManagement"`, and
/// `"order_management"` all tokenize to `["order", "management"]`.
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
        prev_lower = c.is_lowercase();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert a string to PascalCase (e.g., "order-management" -> "OrderManagement")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "order-management" -> "orderManagement")
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    let mut result = match words.next() {
        None => return String::new(),
        Some(first) => first,
    };
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            result.extend(c.to_uppercase());
            result.extend(chars);
        }
    }
    result
}

/// Convert a string to kebab-case (e.g., "OrderManagement" -> "order-management")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to CONSTANT_CASE (e.g., "orderManagement" -> "ORDER_MANAGEMENT")
pub fn to_constant_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Pluralize the last word of a kebab-case name.
///
/// A suffix heuristic, not an inflection engine: `y` after a consonant
/// becomes `ies`, sibilant endings (`s`, `x`, `ch`, `sh`) take `es`,
/// everything else takes `s`. Irregular plurals must be overridden by
/// the caller.
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    if let Some(stem) = s.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !is_vowel(c)) {
            return format!("{}ies", stem);
        }
    }
    if s.ends_with('s') || s.ends_with('x') || s.ends_with("ch") || s.ends_with("sh") {
        return format!("{}es", s);
    }
    format!("{}s", s)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
