//! Barrel (index) templates.

use strata_codegen::{FileHeader, FileTask, NameVariants, RenderContext, Result, SourceBuilder};

use crate::registry::SubmoduleTemplate;

use super::module_path;

/// Parent package barrel: re-exports every generated lib file and each
/// submodule's barrel.
pub(crate) fn render(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    builder: &mut SourceBuilder,
) -> Result<()> {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} barrel", v.class_name),
        format!("Public API of the {} package.", v.file_name),
        module_path(ctx, task),
    ));

    let mut lines = vec![
        "export * from './lib/entities';".to_string(),
        "export * from './lib/errors';".to_string(),
        "export * from './lib/events';".to_string(),
        "export * from './lib/ports';".to_string(),
    ];
    if ctx.spec.include_cqrs {
        lines.push("export * from './lib/commands';".to_string());
        lines.push("export * from './lib/queries';".to_string());
        lines.push("export * from './lib/projections';".to_string());
    }
    if ctx.spec.include_rpc {
        lines.push("export * from './lib/rpc-definitions';".to_string());
    }
    for submodule in &ctx.spec.submodules {
        let sub = NameVariants::resolve(submodule)?;
        lines.push(format!("export * from './lib/{}';", sub.file_name));
    }
    builder.add_raw(lines.join("\n"));
    Ok(())
}

/// Submodule barrel.
pub(crate) fn render_submodule(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    handler: &dyn SubmoduleTemplate,
    builder: &mut SourceBuilder,
) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} barrel", v.class_name),
        format!("Public API of the {} submodule.", v.file_name),
        module_path(ctx, task),
    ));

    let mut lines = vec![
        "export * from './entities';".to_string(),
        "export * from './errors';".to_string(),
    ];
    if ctx.spec.include_cqrs {
        lines.push("export * from './queries';".to_string());
    }
    if handler.supports_rpc() {
        lines.push("export * from './rpc-definitions';".to_string());
    }
    builder.add_raw(lines.join("\n"));
}
