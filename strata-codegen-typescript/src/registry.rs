//! Submodule kind registry.
//!
//! Submodule names map to a handler describing what the kind can
//! generate. New kinds register a handler; nothing dispatches on the
//! name itself anywhere else.

use indexmap::IndexMap;
use strata_core::to_kebab_case;

/// One RPC operation contributed by a submodule kind.
#[derive(Debug, Clone, Copy)]
pub struct RpcOperation {
    /// Unqualified operation name, e.g. "AddItem". Qualified at render
    /// time with the submodule's class-case prefix.
    pub name: &'static str,
    /// Route suffix appended to the submodule's collection path.
    pub route: &'static str,
}

/// Template handler for one submodule kind.
pub trait SubmoduleTemplate: Send + Sync {
    /// Kind tag, also the registry key (kebab-case).
    fn kind(&self) -> &'static str;

    /// Whether the kind has an RPC contract generation rule.
    fn supports_rpc(&self) -> bool {
        true
    }

    /// Whether the kind has a read-side query generation rule.
    fn supports_cqrs(&self) -> bool {
        true
    }

    /// RPC operations generated for this kind.
    fn rpc_operations(&self) -> &'static [RpcOperation];
}

/// Shopping-cart style submodule: item manipulation operations.
pub struct CartTemplate;

impl SubmoduleTemplate for CartTemplate {
    fn kind(&self) -> &'static str {
        "cart"
    }

    fn rpc_operations(&self) -> &'static [RpcOperation] {
        &[
            RpcOperation {
                name: "Get",
                route: "/:id",
            },
            RpcOperation {
                name: "AddItem",
                route: "/:id/items",
            },
            RpcOperation {
                name: "RemoveItem",
                route: "/:id/items/:itemId",
            },
            RpcOperation {
                name: "Clear",
                route: "/:id/items",
            },
        ]
    }
}

/// Checkout style submodule: a process with start/complete transitions.
/// Process state is transient, so there is no read-side query rule.
pub struct CheckoutTemplate;

impl SubmoduleTemplate for CheckoutTemplate {
    fn kind(&self) -> &'static str {
        "checkout"
    }

    fn supports_cqrs(&self) -> bool {
        false
    }

    fn rpc_operations(&self) -> &'static [RpcOperation] {
        &[
            RpcOperation {
                name: "Get",
                route: "/:id",
            },
            RpcOperation {
                name: "Start",
                route: "",
            },
            RpcOperation {
                name: "Complete",
                route: "/:id/complete",
            },
            RpcOperation {
                name: "Cancel",
                route: "/:id/cancel",
            },
        ]
    }
}

/// Management/admin submodule: screens query the parent's read models
/// directly, so there is no RPC contract rule.
pub struct ManagementTemplate;

impl SubmoduleTemplate for ManagementTemplate {
    fn kind(&self) -> &'static str {
        "management"
    }

    fn supports_rpc(&self) -> bool {
        false
    }

    fn rpc_operations(&self) -> &'static [RpcOperation] {
        &[]
    }
}

/// Fallback for submodule names no specific kind claims.
pub struct GenericTemplate;

impl SubmoduleTemplate for GenericTemplate {
    fn kind(&self) -> &'static str {
        "generic"
    }

    fn rpc_operations(&self) -> &'static [RpcOperation] {
        &[
            RpcOperation {
                name: "Get",
                route: "/:id",
            },
            RpcOperation {
                name: "List",
                route: "",
            },
            RpcOperation {
                name: "Create",
                route: "",
            },
            RpcOperation {
                name: "Update",
                route: "/:id",
            },
            RpcOperation {
                name: "Remove",
                route: "/:id",
            },
        ]
    }
}

/// Maps submodule names to their kind handler, with a fallback entry.
pub struct SubmoduleRegistry {
    handlers: IndexMap<&'static str, Box<dyn SubmoduleTemplate>>,
    fallback: Box<dyn SubmoduleTemplate>,
}

impl SubmoduleRegistry {
    /// Registry with the built-in kinds and the generic fallback.
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            handlers: IndexMap::new(),
            fallback: Box::new(GenericTemplate),
        };
        registry.register(Box::new(CartTemplate));
        registry.register(Box::new(CheckoutTemplate));
        registry.register(Box::new(ManagementTemplate));
        registry
    }

    /// Register a handler under its kind tag. A handler with the same
    /// tag replaces the previous one.
    pub fn register(&mut self, handler: Box<dyn SubmoduleTemplate>) {
        self.handlers.insert(handler.kind(), handler);
    }

    /// Resolve a submodule name to its handler, falling back to the
    /// generic kind. Matching is on the file-case spelling of the name.
    pub fn resolve(&self, name: &str) -> &dyn SubmoduleTemplate {
        let key = to_kebab_case(name);
        match self.handlers.get(key.as_str()) {
            Some(handler) => handler.as_ref(),
            None => self.fallback.as_ref(),
        }
    }
}

impl Default for SubmoduleRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_kinds() {
        let registry = SubmoduleRegistry::with_defaults();
        assert_eq!(registry.resolve("cart").kind(), "cart");
        assert_eq!(registry.resolve("Checkout").kind(), "checkout");
        assert_eq!(registry.resolve("management").kind(), "management");
    }

    #[test]
    fn test_unknown_name_falls_back_to_generic() {
        let registry = SubmoduleRegistry::with_defaults();
        let handler = registry.resolve("wishlist");
        assert_eq!(handler.kind(), "generic");
        assert!(handler.supports_rpc());
    }

    #[test]
    fn test_capabilities() {
        let registry = SubmoduleRegistry::with_defaults();
        assert!(!registry.resolve("management").supports_rpc());
        assert!(!registry.resolve("checkout").supports_cqrs());
        assert!(registry.resolve("cart").supports_rpc());
    }

    #[test]
    fn test_new_kind_registers_without_touching_dispatch() {
        struct WishlistTemplate;
        impl SubmoduleTemplate for WishlistTemplate {
            fn kind(&self) -> &'static str {
                "wishlist"
            }
            fn rpc_operations(&self) -> &'static [RpcOperation] {
                &[RpcOperation {
                    name: "Get",
                    route: "/:id",
                }]
            }
        }

        let mut registry = SubmoduleRegistry::with_defaults();
        registry.register(Box::new(WishlistTemplate));
        assert_eq!(registry.resolve("wishlist").kind(), "wishlist");
    }
}
