//! Domain event templates.

use strata_codegen::{FileHeader, FileTask, RenderContext, SourceBuilder};

use crate::{
    naming,
    resource::{EventPayload, ResourceSpec},
};

use super::module_path;

/// Domain events: one interface per configured event kind plus the
/// discriminated union over all of them.
pub(crate) fn render(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    resource: &ResourceSpec,
    builder: &mut SourceBuilder,
) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} events", v.class_name),
        format!("Domain events emitted by the {} domain.", v.file_name),
        module_path(ctx, task),
    ));
    builder.imports().type_only("./entities", &v.class_name);

    for kind in &resource.event_kinds {
        let interface = naming::event_interface(v, kind.suffix);
        let payload_line = match kind.payload {
            EventPayload::Entity => format!("  entity: {};", v.class_name),
            EventPayload::Id => "  id: string;".to_string(),
        };
        builder.add_raw(format!(
            "export interface {} {{\n  kind: '{}';\n{}\n}}",
            interface,
            naming::kind_tag(v, kind.action),
            payload_line
        ));
    }

    let mut union = vec![format!("export type {} =", naming::event_union(v))];
    for kind in &resource.event_kinds {
        union.push(format!("  | {}", naming::event_interface(v, kind.suffix)));
    }
    let mut union = union.join("\n");
    union.push(';');
    builder.add_raw(union);
}
