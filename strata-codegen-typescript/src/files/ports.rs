//! Data-access port templates.

use strata_codegen::{FileHeader, FileTask, RenderContext, SourceBuilder};

use crate::naming;

use super::module_path;

/// Repository port implemented by the infrastructure layer.
pub(crate) fn render(ctx: &RenderContext<'_>, task: &FileTask, builder: &mut SourceBuilder) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} ports", v.class_name),
        "Data-access ports implemented by the infrastructure layer.".to_string(),
        module_path(ctx, task),
    ));

    let id = naming::id_type(v);
    builder.imports().type_only("./entities", &v.class_name);
    builder.imports().type_only("./entities", &id);

    let entity = &v.class_name;
    let lines = vec![
        format!("export interface {} {{", naming::repository_port(v)),
        format!("  findById(id: {}): Promise<{} | null>;", id, entity),
        format!("  findAll(): Promise<{}[]>;", entity),
        format!("  save(entity: {}): Promise<void>;", entity),
        format!("  remove(id: {}): Promise<void>;", id),
        "}".to_string(),
    ];
    builder.add_raw(lines.join("\n"));
}
