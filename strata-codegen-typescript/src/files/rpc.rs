//! RPC contract templates.

use strata_codegen::{FileHeader, FileTask, NameVariants, RenderContext, SourceBuilder};
use strata_core::to_camel_case;
use strata_manifest::Platform;

use crate::{
    naming,
    registry::{RpcOperation, SubmoduleTemplate},
};

use super::module_path;

/// Operations generated for a parent domain contract.
const PARENT_OPERATIONS: &[RpcOperation] = &[
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
];

fn transport_module(platform: Platform) -> &'static str {
    match platform {
        Platform::Node => "@strata/rpc-node",
        Platform::Browser => "@strata/rpc-browser",
        Platform::Edge => "@strata/rpc-edge",
    }
}

/// Parent domain RPC contract.
pub(crate) fn render(ctx: &RenderContext<'_>, task: &FileTask, builder: &mut SourceBuilder) {
    let v = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} RPC definitions", v.class_name),
        format!("RPC contract shared by {} clients and handlers.", v.file_name),
        module_path(ctx, task),
    ));
    builder
        .imports()
        .value(transport_module(ctx.spec.platform), "createRpcClient");

    definition_table(v, PARENT_OPERATIONS, builder);
}

/// Submodule RPC contract. Operation names carry the submodule's own
/// class-case prefix; the error class carries the parent's.
pub(crate) fn render_submodule(
    ctx: &RenderContext<'_>,
    task: &FileTask,
    handler: &dyn SubmoduleTemplate,
    builder: &mut SourceBuilder,
) {
    let sub = &task.variant;
    builder.add_header(FileHeader::new(
        format!("{} RPC definitions", sub.class_name),
        format!(
            "RPC contract shared by {} clients and handlers.",
            sub.file_name
        ),
        module_path(ctx, task),
    ));

    let rpc_error = naming::submodule_error_class(ctx.parent, sub, "RpcError");
    builder
        .imports()
        .value(transport_module(ctx.spec.platform), "createRpcClient");
    builder.imports().value("./errors", &rpc_error);

    definition_table(sub, handler.rpc_operations(), builder);

    builder.add_raw(
        [
            format!(
                "export function to{}RpcError(cause: unknown): {} {{",
                sub.class_name, rpc_error
            ),
            format!("  return new {}(String(cause));", rpc_error),
            "}".to_string(),
        ]
        .join("\n"),
    );
}

fn definition_table(v: &NameVariants, operations: &[RpcOperation], builder: &mut SourceBuilder) {
    let table = naming::rpcs_const(v);

    let mut lines = vec![format!("export const {} = {{", table)];
    for op in operations {
        lines.push(format!(
            "  {}: {{ name: '{}', path: '/{}{}' }},",
            to_camel_case(op.name),
            naming::rpc_operation_name(v, op.name),
            v.plural_file_name,
            op.route
        ));
    }
    lines.push("} as const;".to_string());
    builder.add_raw(lines.join("\n"));

    builder.add_raw(format!(
        "export type {} = (typeof {})[keyof typeof {}]['name'];",
        naming::rpc_name_type(v),
        table,
        table
    ));

    builder.add_raw(format!(
        "export const {} = createRpcClient({});",
        naming::rpc_client_const(v),
        table
    ));
}
