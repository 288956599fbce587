//! Role-suffix symbol spellings.
//!
//! Every generated symbol is `variant + role suffix`, nothing else. Two
//! files that reference the same logical symbol compute the identical
//! spelling from the same variant without consulting each other; that is
//! the invariant that makes cross-file references line up.

use strata_codegen::NameVariants;
use strata_core::to_constant_case;

/// Entity id alias, e.g. "ProductId".
pub(crate) fn id_type(v: &NameVariants) -> String {
    format!("{}Id", v.class_name)
}

/// Collection constant, e.g. "PRODUCTS_COLLECTION".
pub(crate) fn collection_constant(v: &NameVariants) -> String {
    format!("{}_COLLECTION", to_constant_case(&v.plural_file_name))
}

/// Error class, e.g. "ProductNotFoundError".
pub(crate) fn error_class(v: &NameVariants, suffix: &str) -> String {
    format!("{}{}", v.class_name, suffix)
}

/// Submodule error class carrying the parent's class-case prefix,
/// e.g. "OrderCartRpcError".
pub(crate) fn submodule_error_class(
    parent: &NameVariants,
    sub: &NameVariants,
    suffix: &str,
) -> String {
    format!("{}{}{}", parent.class_name, sub.class_name, suffix)
}

/// Event interface, e.g. "ProductCreatedEvent".
pub(crate) fn event_interface(v: &NameVariants, suffix: &str) -> String {
    format!("{}{}", v.class_name, suffix)
}

/// Event union alias, e.g. "ProductEvent".
pub(crate) fn event_union(v: &NameVariants) -> String {
    format!("{}Event", v.class_name)
}

/// Repository port, e.g. "ProductRepository".
pub(crate) fn repository_port(v: &NameVariants) -> String {
    format!("{}Repository", v.class_name)
}

/// Projection interface, e.g. "ProductProjection".
pub(crate) fn projection_interface(v: &NameVariants) -> String {
    format!("{}Projection", v.class_name)
}

/// RPC definition table, e.g. "ProductRpcs".
pub(crate) fn rpcs_const(v: &NameVariants) -> String {
    format!("{}Rpcs", v.class_name)
}

/// RPC name union, e.g. "ProductRpcName".
pub(crate) fn rpc_name_type(v: &NameVariants) -> String {
    format!("{}RpcName", v.class_name)
}

/// RPC client binding, e.g. "productRpcClient".
pub(crate) fn rpc_client_const(v: &NameVariants) -> String {
    format!("{}RpcClient", v.property_name)
}

/// Qualified RPC operation name, e.g. "Cart.AddItem".
pub(crate) fn rpc_operation_name(v: &NameVariants, operation: &str) -> String {
    format!("{}.{}", v.class_name, operation)
}

/// Event/command/query discriminant, e.g. "product.created".
pub(crate) fn kind_tag(v: &NameVariants, action: &str) -> String {
    format!("{}.{}", v.property_name, action)
}
