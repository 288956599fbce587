//! Contract-layer entity templates.

use strata_codegen::{FileHeader, FileTask, RenderContext, SourceBuilder};

use crate::{naming, resource::ResourceSpec};

use super::module_path;

/// Parent domain entities: id alias, entity interface, collection
/// constant.
pub(crate) fn render(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    resource: &ResourceSpec,
    builder: &mut SourceBuilder,
) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} entities", v.class_name),
        format!("Contract-layer entity types for the {} domain.", v.file_name),
        module_path(ctx, task),
    ));

    let id = naming::id_type(v);
    builder.add_raw(format!("export type {} = string;", id));

    let mut lines = vec![format!("export interface {} {{", v.class_name)];
    lines.push(format!("  id: {};", id));
    for field in &resource.fields {
        lines.push(format!("  {}: {};", field.name, field.ty));
    }
    lines.push("}".to_string());
    builder.add_raw(lines.join("\n"));

    builder.add_raw(format!(
        "export const {} = '{}';",
        naming::collection_constant(v),
        v.plural_file_name
    ));
}

/// Submodule entities: re-export of the parent entity, own id alias and
/// interface carrying a reference back to the parent.
pub(crate) fn render_submodule(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    resource: &ResourceSpec,
    builder: &mut SourceBuilder,
) {
    let sub = &task.variant;
    let parent = ctx.parent;
    builder.add_header(FileHeader::new(
        format!("{} entities", sub.class_name),
        format!(
            "Contract-layer entity types for the {} submodule.",
            sub.file_name
        ),
        module_path(ctx, task),
    ));

    builder.add_raw(format!(
        "export type {{ {} }} from '../entities';",
        parent.class_name
    ));

    let id = naming::id_type(sub);
    builder.add_raw(format!("export type {} = string;", id));

    let mut lines = vec![format!("export interface {} {{", sub.class_name)];
    lines.push(format!("  id: {};", id));
    lines.push(format!("  {}Id: string;", parent.property_name));
    for field in &resource.fields {
        lines.push(format!("  {}: {};", field.name, field.ty));
    }
    lines.push("}".to_string());
    builder.add_raw(lines.join("\n"));

    builder.add_raw(format!(
        "export const {} = '{}';",
        naming::collection_constant(sub),
        sub.plural_file_name
    ));
}
