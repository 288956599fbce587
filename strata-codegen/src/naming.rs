//! Identifier variants derived from one raw name.

use serde::Serialize;
use strata_core::{pluralize, split_words, to_camel_case, to_constant_case, to_pascal_case};

use crate::{Error, Result};

/// Reserved words in TypeScript, the target output language.
///
/// A name whose property-case spelling lands on one of these cannot be
/// used as a bare identifier in generated source.
const RESERVED_TYPESCRIPT: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "as",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    "any",
    "boolean",
    "constructor",
    "declare",
    "get",
    "module",
    "require",
    "number",
    "set",
    "string",
    "symbol",
    "type",
    "from",
    "of",
    "async",
    "await",
];

/// The case spellings derived from one input name.
///
/// A pure function of the input: equal names always produce equal
/// variants, independent of call order or any external state. Variants
/// are computed once per generation task and never cached across
/// different inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    /// PascalCase, e.g. "OrderManagement"
    pub class_name: String,
    /// camelCase, e.g. "orderManagement"
    pub property_name: String,
    /// kebab-case, e.g. "order-management"
    pub file_name: String,
    /// CONSTANT_CASE, e.g. "ORDER_MANAGEMENT"
    pub constant_name: String,
    /// kebab-case with the last word pluralized, e.g. "order-managements"
    pub plural_file_name: String,
}

impl NameVariants {
    /// Derive every case variant from a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NameValidation`] for empty input, input without
    /// an alphabetic word, or input whose property-case spelling is a
    /// TypeScript reserved word.
    pub fn resolve(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::name_validation(name, "name is empty"));
        }

        let words = split_words(name);
        if !words
            .iter()
            .any(|w| w.chars().any(|c| c.is_alphabetic()))
        {
            return Err(Error::name_validation(
                name,
                "name contains no alphabetic word",
            ));
        }

        let property_name = to_camel_case(name);
        if RESERVED_TYPESCRIPT.contains(&property_name.as_str()) {
            return Err(Error::name_validation(
                name,
                format!("'{}' is a TypeScript reserved word", property_name),
            ));
        }

        let file_name = words.join("-");
        Ok(Self {
            class_name: to_pascal_case(name),
            property_name,
            plural_file_name: pluralize(&file_name),
            constant_name: to_constant_case(name),
            file_name,
        })
    }

    /// PascalCase spelling of the plural form, e.g. "Products".
    pub fn plural_class_name(&self) -> String {
        to_pascal_case(&self.plural_file_name)
    }

    /// camelCase spelling of the plural form, e.g. "products".
    pub fn plural_property_name(&self) -> String {
        to_camel_case(&self.plural_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_kebab_input() {
        let v = NameVariants::resolve("order-management").unwrap();
        assert_eq!(v.class_name, "OrderManagement");
        assert_eq!(v.property_name, "orderManagement");
        assert_eq!(v.file_name, "order-management");
        assert_eq!(v.constant_name, "ORDER_MANAGEMENT");
        assert_eq!(v.plural_file_name, "order-managements");
    }

    #[test]
    fn test_resolve_camel_input() {
        let v = NameVariants::resolve("orderManagement").unwrap();
        assert_eq!(v.class_name, "OrderManagement");
        assert_eq!(v.file_name, "order-management");
    }

    #[test]
    fn test_resolve_single_word() {
        let v = NameVariants::resolve("product").unwrap();
        assert_eq!(v.class_name, "Product");
        assert_eq!(v.property_name, "product");
        assert_eq!(v.plural_file_name, "products");
        assert_eq!(v.plural_class_name(), "Products");
    }

    #[test]
    fn test_resolve_plural_exceptions() {
        assert_eq!(
            NameVariants::resolve("category").unwrap().plural_file_name,
            "categories"
        );
        assert_eq!(
            NameVariants::resolve("address").unwrap().plural_file_name,
            "addresses"
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            NameVariants::resolve(""),
            Err(Error::NameValidation { .. })
        ));
        assert!(matches!(
            NameVariants::resolve("   "),
            Err(Error::NameValidation { .. })
        ));
    }

    #[test]
    fn test_no_alphabetic_word_rejected() {
        assert!(matches!(
            NameVariants::resolve("1234"),
            Err(Error::NameValidation { .. })
        ));
        assert!(matches!(
            NameVariants::resolve("--_--"),
            Err(Error::NameValidation { .. })
        ));
    }

    #[test]
    fn test_reserved_word_rejected() {
        assert!(matches!(
            NameVariants::resolve("class"),
            Err(Error::NameValidation { .. })
        ));
        assert!(matches!(
            NameVariants::resolve("New"),
            Err(Error::NameValidation { .. })
        ));
        // multi-word names never collapse to a single reserved word
        assert!(NameVariants::resolve("class-room").is_ok());
    }

    #[test]
    fn test_stability_under_rederivation() {
        for name in ["product", "order-management", "checkoutFlow", "API gateway"] {
            let first = NameVariants::resolve(name).unwrap();
            let again = NameVariants::resolve(&first.file_name).unwrap();
            assert_eq!(first.class_name, again.class_name, "unstable for {name}");
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_file_name_is_lowercase_kebab() {
        let v = NameVariants::resolve("Order Management").unwrap();
        assert!(
            v.file_name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
    }
}
