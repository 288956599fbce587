//! CQRS templates: commands, queries, projections.

use strata_codegen::{FileHeader, FileTask, RenderContext, SourceBuilder};

use crate::{
    naming,
    resource::{EventPayload, ResourceSpec},
};

use super::module_path;

/// Write-side command types.
pub(crate) fn commands(ctx: &RenderContext<'_>, task: &FileTask, builder: &mut SourceBuilder) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} commands", v.class_name),
        format!(
            "Write-side commands handled by the {} feature layer.",
            v.file_name
        ),
        module_path(ctx, task),
    ));
    builder.imports().type_only("./entities", &v.class_name);

    let entity = &v.class_name;
    builder.add_raw(
        [
            format!("export interface Create{}Command {{", entity),
            format!("  kind: '{}';", naming::kind_tag(v, "create")),
            format!("  payload: Omit<{}, 'id'>;", entity),
            "}".to_string(),
        ]
        .join("\n"),
    );
    builder.add_raw(
        [
            format!("export interface Update{}Command {{", entity),
            format!("  kind: '{}';", naming::kind_tag(v, "update")),
            "  id: string;".to_string(),
            format!("  payload: Partial<Omit<{}, 'id'>>;", entity),
            "}".to_string(),
        ]
        .join("\n"),
    );
    builder.add_raw(
        [
            format!("export interface Delete{}Command {{", entity),
            format!("  kind: '{}';", naming::kind_tag(v, "delete")),
            "  id: string;".to_string(),
            "}".to_string(),
        ]
        .join("\n"),
    );
    builder.add_raw(
        [
            format!("export type {}Command =", entity),
            format!("  | Create{}Command", entity),
            format!("  | Update{}Command", entity),
            format!("  | Delete{}Command;", entity),
        ]
        .join("\n"),
    );
}

/// Read-side query types.
pub(crate) fn queries(ctx: &RenderContext<'_>, task: &FileTask, builder: &mut SourceBuilder) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} queries", v.class_name),
        format!(
            "Read-side queries served by the {} feature layer.",
            v.file_name
        ),
        module_path(ctx, task),
    ));

    let id = naming::id_type(v);
    builder.imports().type_only("./entities", &id);

    let entity = &v.class_name;
    let list = format!("List{}Query", v.plural_class_name());
    builder.add_raw(
        [
            format!("export interface Get{}Query {{", entity),
            format!("  kind: '{}';", naming::kind_tag(v, "get")),
            format!("  id: {};", id),
            "}".to_string(),
        ]
        .join("\n"),
    );
    builder.add_raw(
        [
            format!("export interface {} {{", list),
            format!("  kind: '{}';", naming::kind_tag(v, "list")),
            "}".to_string(),
        ]
        .join("\n"),
    );
    builder.add_raw(format!(
        "export type {}Query = Get{}Query | {};",
        entity, entity, list
    ));
}

/// Submodule read-side queries.
pub(crate) fn submodule_queries(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    builder: &mut SourceBuilder,
) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} queries", v.class_name),
        format!("Read-side queries served by the {} submodule.", v.file_name),
        module_path(ctx, task),
    ));

    let id = naming::id_type(v);
    builder.imports().type_only("./entities", &id);

    let entity = &v.class_name;
    builder.add_raw(
        [
            format!("export interface Get{}Query {{", entity),
            format!("  kind: '{}';", naming::kind_tag(v, "get")),
            format!("  id: {};", id),
            "}".to_string(),
        ]
        .join("\n"),
    );
    builder.add_raw(format!("export type {}Query = Get{}Query;", entity, entity));
}

/// Read-model projection folded from the domain's events.
pub(crate) fn projections(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    resource: &ResourceSpec,
    builder: &mut SourceBuilder,
) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} projections", v.class_name),
        format!("Read models folded from {} domain events.", v.file_name),
        module_path(ctx, task),
    ));
    builder.imports().type_only("./entities", &v.class_name);
    builder.imports().type_only("./events", &naming::event_union(v));

    let entity = &v.class_name;
    let projection = naming::projection_interface(v);
    let collection = v.plural_property_name();
    let upsert = format!("upsert{}", entity);

    builder.add_raw(
        [
            format!("export interface {} {{", projection),
            format!("  readonly {}: ReadonlyArray<{}>;", collection, entity),
            "}".to_string(),
        ]
        .join("\n"),
    );

    builder.add_raw(
        [
            format!(
                "export const INITIAL_{}_PROJECTION: {} = {{",
                v.constant_name, projection
            ),
            format!("  {}: [],", collection),
            "};".to_string(),
        ]
        .join("\n"),
    );

    let mut apply = vec![
        format!("export function apply{}(", naming::event_union(v)),
        format!("  state: {},", projection),
        format!("  event: {},", naming::event_union(v)),
        format!("): {} {{", projection),
        "  switch (event.kind) {".to_string(),
    ];
    for kind in &resource.event_kinds {
        apply.push(format!("    case '{}':", naming::kind_tag(v, kind.action)));
        match kind.payload {
            EventPayload::Entity => {
                apply.push(format!(
                    "      return {{ {}: {}(state.{}, event.entity) }};",
                    collection, upsert, collection
                ));
            }
            EventPayload::Id => {
                apply.push(format!(
                    "      return {{ {}: state.{}.filter((entity) => entity.id !== event.id) }};",
                    collection, collection
                ));
            }
        }
    }
    apply.push("  }".to_string());
    apply.push("}".to_string());
    builder.add_raw(apply.join("\n"));

    builder.add_raw(
        [
            format!("function {}(", upsert),
            format!("  entities: ReadonlyArray<{}>,", entity),
            format!("  entity: {},", entity),
            format!("): ReadonlyArray<{}> {{", entity),
            "  const index = entities.findIndex((existing) => existing.id === entity.id);".to_string(),
            "  if (index === -1) {".to_string(),
            "    return [...entities, entity];".to_string(),
            "  }".to_string(),
            "  return entities.map((existing, i) => (i === index ? entity : existing));".to_string(),
            "}".to_string(),
        ]
        .join("\n"),
    );
}
