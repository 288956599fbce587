//! Per-file import accumulation and rendering.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::{Error, Result};

/// Consolidated view of one module's requested symbols.
#[derive(Debug, Clone, Default)]
struct ModuleImports {
    value_symbols: BTreeSet<String>,
    type_symbols: BTreeSet<String>,
}

/// Accumulates import requests for a single generated file and renders
/// them as one deterministic block.
///
/// Merge rules: repeated requests for the same `(module, symbol)` pair
/// collapse to one entry, and a symbol requested both as a value and as
/// type-only from the same module collapses to the value form (a value
/// import covers type usage).
///
/// Each registry is owned by exactly one file-generation call; nothing
/// is shared across files.
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    imports: IndexMap<String, ModuleImports>,
}

impl ImportRegistry {
    /// Create a new empty import registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request symbols from a module.
    pub fn request(
        &mut self,
        module: &str,
        symbols: impl IntoIterator<Item = impl Into<String>>,
        type_only: bool,
    ) {
        let entry = self.imports.entry(module.to_string()).or_default();
        for symbol in symbols {
            let symbol = symbol.into();
            if type_only {
                if !entry.value_symbols.contains(&symbol) {
                    entry.type_symbols.insert(symbol);
                }
            } else {
                entry.type_symbols.remove(&symbol);
                entry.value_symbols.insert(symbol);
            }
        }
    }

    /// Request a single value symbol from a module.
    pub fn value(&mut self, module: &str, symbol: &str) {
        self.request(module, [symbol], false);
    }

    /// Request a single type-only symbol from a module.
    pub fn type_only(&mut self, module: &str, symbol: &str) {
        self.request(module, [symbol], true);
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports.get(module).is_some_and(|m| {
            m.value_symbols.contains(symbol) || m.type_symbols.contains(symbol)
        })
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules with requests.
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Render the deterministic import block.
    ///
    /// External/package specifiers come first, then relative specifiers,
    /// each group sorted alphabetically. Within a module the value import
    /// statement precedes a separate type-only statement; the two are
    /// never interleaved, so output is stable regardless of request
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImportConflict`] when two different modules
    /// request the same unaliased symbol.
    pub fn render(&self) -> Result<String> {
        self.check_conflicts()?;

        let mut external: Vec<&str> = Vec::new();
        let mut relative: Vec<&str> = Vec::new();
        for module in self.imports.keys() {
            if is_relative(module) {
                relative.push(module);
            } else {
                external.push(module);
            }
        }
        external.sort_unstable();
        relative.sort_unstable();

        let mut blocks = Vec::new();
        for group in [external, relative] {
            let mut lines = Vec::new();
            for module in group {
                let entry = &self.imports[module];
                if !entry.value_symbols.is_empty() {
                    lines.push(import_line(module, &entry.value_symbols, false));
                }
                if !entry.type_symbols.is_empty() {
                    lines.push(import_line(module, &entry.type_symbols, true));
                }
            }
            if !lines.is_empty() {
                blocks.push(lines.join("\n"));
            }
        }

        Ok(blocks.join("\n"))
    }

    /// The same unaliased symbol from two modules is always an error,
    /// never a silent shadow.
    fn check_conflicts(&self) -> Result<()> {
        let mut modules: Vec<&str> = self.imports.keys().map(String::as_str).collect();
        modules.sort_unstable();

        let mut seen: IndexMap<&str, &str> = IndexMap::new();
        for module in modules {
            let entry = &self.imports[module];
            for symbol in entry.value_symbols.iter().chain(&entry.type_symbols) {
                match seen.get(symbol.as_str()) {
                    Some(first) => {
                        return Err(Error::ImportConflict {
                            symbol: symbol.clone(),
                            first_module: (*first).to_string(),
                            second_module: module.to_string(),
                        });
                    }
                    None => {
                        seen.insert(symbol.as_str(), module);
                    }
                }
            }
        }
        Ok(())
    }
}

fn is_relative(module: &str) -> bool {
    module.starts_with("./") || module.starts_with("../") || module == "." || module == ".."
}

fn import_line(module: &str, symbols: &BTreeSet<String>, type_only: bool) -> String {
    let type_kw = if type_only { "type " } else { "" };
    let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
    format!(
        "import {}{{ {} }} from '{}';",
        type_kw,
        symbols.join(", "),
        module
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deduplicates() {
        let mut imports = ImportRegistry::new();
        imports.value("./entities", "Product");
        imports.value("./entities", "Product");
        imports.value("./entities", "Product");

        assert!(imports.has_symbol("./entities", "Product"));
        assert_eq!(imports.len(), 1);

        let block = imports.render().unwrap();
        assert_eq!(block, "import { Product } from './entities';");
    }

    #[test]
    fn test_request_accepts_symbol_sets() {
        let mut imports = ImportRegistry::new();
        imports.request("./entities", ["Product", "ProductId"], true);

        let block = imports.render().unwrap();
        assert_eq!(
            block,
            "import type { Product, ProductId } from './entities';"
        );
    }

    #[test]
    fn test_value_wins_over_type_only() {
        let mut imports = ImportRegistry::new();
        imports.type_only("./entities", "Product");
        imports.value("./entities", "Product");

        let block = imports.render().unwrap();
        assert_eq!(block, "import { Product } from './entities';");

        // same outcome with the requests reversed
        let mut imports = ImportRegistry::new();
        imports.value("./entities", "Product");
        imports.type_only("./entities", "Product");
        assert_eq!(imports.render().unwrap(), block);
    }

    #[test]
    fn test_value_and_type_statements_are_separate() {
        let mut imports = ImportRegistry::new();
        imports.value("./entities", "PRODUCTS_COLLECTION");
        imports.type_only("./entities", "Product");

        let block = imports.render().unwrap();
        assert_eq!(
            block,
            "import { PRODUCTS_COLLECTION } from './entities';\n\
             import type { Product } from './entities';"
        );
    }

    #[test]
    fn test_external_before_relative_sorted() {
        let mut imports = ImportRegistry::new();
        imports.type_only("./entities", "Product");
        imports.value("zod", "z");
        imports.value("@strata/rpc-node", "createRpcClient");

        let block = imports.render().unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(
            lines,
            vec![
                "import { createRpcClient } from '@strata/rpc-node';",
                "import { z } from 'zod';",
                "import type { Product } from './entities';",
            ]
        );
    }

    #[test]
    fn test_order_independent_output() {
        let mut a = ImportRegistry::new();
        a.value("./ports", "save");
        a.value("./entities", "Product");

        let mut b = ImportRegistry::new();
        b.value("./entities", "Product");
        b.value("./ports", "save");

        assert_eq!(a.render().unwrap(), b.render().unwrap());
    }

    #[test]
    fn test_conflict_names_both_modules() {
        let mut imports = ImportRegistry::new();
        imports.value("./entities", "Foo");
        imports.value("./errors", "Foo");

        let err = imports.render().unwrap_err();
        match err {
            Error::ImportConflict {
                symbol,
                first_module,
                second_module,
            } => {
                assert_eq!(symbol, "Foo");
                assert_eq!(first_module, "./entities");
                assert_eq!(second_module, "./errors");
            }
            other => panic!("expected ImportConflict, got {other:?}"),
        }
    }

    #[test]
    fn test_same_module_same_symbol_is_not_a_conflict() {
        let mut imports = ImportRegistry::new();
        imports.value("./entities", "Foo");
        imports.type_only("./entities", "Foo");
        assert!(imports.render().is_ok());
    }
}
