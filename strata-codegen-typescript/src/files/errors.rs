//! Contract-layer error class templates.

use strata_codegen::{FileHeader, FileTask, RenderContext, SourceBuilder};

use crate::{
    naming,
    registry::SubmoduleTemplate,
    resource::{ErrorShape, ResourceSpec},
};

use super::module_path;

/// Parent domain error classes, one per configured error kind.
pub(crate) fn render(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    resource: &ResourceSpec,
    builder: &mut SourceBuilder,
) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} errors", v.class_name),
        format!("Contract-layer error classes for the {} domain.", v.file_name),
        module_path(ctx, task),
    ));

    for kind in &resource.error_kinds {
        let class = naming::error_class(v, kind.suffix);
        builder.add_raw(error_block(&class, &v.file_name, kind.shape));
    }
}

/// Submodule error classes. Spelled with the parent's class-case prefix
/// so dependent files can compute the name from the two variants alone.
pub(crate) fn render_submodule(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    resource: &ResourceSpec,
    handler: &dyn SubmoduleTemplate,
    builder: &mut SourceBuilder,
) {
    let sub = &task.variant;
    let parent = ctx.parent;
    builder.add_header(FileHeader::new(
        format!("{} errors", sub.class_name),
        format!("Error classes for the {} submodule.", sub.file_name),
        module_path(ctx, task),
    ));

    for kind in &resource.error_kinds {
        let class = naming::submodule_error_class(parent, sub, kind.suffix);
        builder.add_raw(error_block(&class, &sub.file_name, kind.shape));
    }

    if handler.supports_rpc() {
        let class = naming::submodule_error_class(parent, sub, "RpcError");
        builder.add_raw(error_block(&class, &sub.file_name, ErrorShape::ByMessage));
    }
}

fn error_block(class: &str, file_name: &str, shape: ErrorShape) -> String {
    let ctor = match shape {
        ErrorShape::ById { detail } => vec![
            "  constructor(id: string) {".to_string(),
            format!("    super(`{} ${{id}} {}`);", file_name, detail),
        ],
        ErrorShape::ByMessage => vec![
            "  constructor(message: string) {".to_string(),
            "    super(message);".to_string(),
        ],
    };

    let mut lines = vec![format!("export class {} extends Error {{", class)];
    lines.extend(ctor);
    lines.push(format!("    this.name = '{}';", class));
    lines.push("  }".to_string());
    lines.push("}".to_string());
    lines.join("\n")
}
