//! TypeScript template catalog for the strata generator.
//!
//! Renders the layered-library file set (contract, data-access, feature,
//! infrastructure) for one domain and its submodules. All content flows
//! through the engine's [`SourceBuilder`](strata_codegen::SourceBuilder);
//! every exported symbol is a pure function of a naming variant and a
//! role suffix, which is what keeps independently generated files
//! consistent with each other.

mod catalog;
mod files;
mod generator;
mod naming;
mod registry;
mod render;
mod resource;

pub use catalog::TsCatalog;
pub use generator::DomainGenerator;
pub use registry::{
    CartTemplate, CheckoutTemplate, GenericTemplate, ManagementTemplate, RpcOperation,
    SubmoduleRegistry, SubmoduleTemplate,
};
pub use render::{RenderOptions, render_file};
pub use resource::{ErrorKindSpec, ErrorShape, EventKindSpec, EventPayload, FieldSpec, ResourceSpec};
