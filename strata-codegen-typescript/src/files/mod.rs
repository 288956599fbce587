//! One renderer per generated file kind.
//!
//! Renderers only append to the builder they are handed; the engine
//! owns rendering order, import consolidation, and blank-line policy.

pub(crate) mod barrel;
pub(crate) mod cqrs;
pub(crate) mod entities;
pub(crate) mod errors;
pub(crate) mod events;
pub(crate) mod ports;
pub(crate) mod rpc;

use strata_codegen::{FileTask, RenderContext};

/// Module path for the file header, e.g. "@acme/order" or
/// "@acme/order/cart".
pub(crate) fn module_path(ctx: &RenderContext<'_>, task: &FileTask) -> String {
    let base = ctx.workspace.package_name(&ctx.parent.file_name);
    if task.submodule.is_some() {
        format!("{}/{}", base, task.variant.file_name)
    } else {
        base
    }
}
