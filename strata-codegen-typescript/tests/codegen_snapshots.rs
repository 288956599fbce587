//! Snapshot tests for generated TypeScript files.
//!
//! These verify the exact shape of individual templates through the
//! standalone `render_file` entry point, plus whole-run properties of
//! the generator. Run `cargo insta review` after intentional template
//! changes.

use strata_codegen::{NameVariants, Template};
use strata_codegen_typescript::{DomainGenerator, RenderOptions, render_file};
use strata_manifest::{DomainSpec, Platform, WorkspaceContext};

fn render(template: Template, name: &str, spec: DomainSpec) -> String {
    let variant = NameVariants::resolve(name).expect("valid name");
    render_file(template, &variant, &RenderOptions::new(spec)).expect("render failed")
}

#[test]
fn test_index_barrel_minimal() {
    let content = render(Template::Index, "product", DomainSpec::new("product"));
    insta::assert_snapshot!(content, @r"
/**
 * Product barrel
 *
 * Public API of the product package.
 *
 * @module product
 */

export * from './lib/entities';
export * from './lib/errors';
export * from './lib/events';
export * from './lib/ports';
");
}

#[test]
fn test_entities_file() {
    let content = render(Template::Entities, "product", DomainSpec::new("product"));
    insta::assert_snapshot!(content, @r"
/**
 * Product entities
 *
 * Contract-layer entity types for the product domain.
 *
 * @module product
 */

export type ProductId = string;

export interface Product {
  id: ProductId;
  createdAt: string;
  updatedAt: string;
}

export const PRODUCTS_COLLECTION = 'products';
");
}

#[test]
fn test_submodule_rpc_definitions_file() {
    let content = render(
        Template::SubmoduleRpcDefinitions,
        "cart",
        DomainSpec::new("order"),
    );
    insta::assert_snapshot!(content, @r"
/**
 * Cart RPC definitions
 *
 * RPC contract shared by cart clients and handlers.
 *
 * @module order/cart
 */

import { createRpcClient } from '@strata/rpc-node';
import { OrderCartRpcError } from './errors';

export const CartRpcs = {
  get: { name: 'Cart.Get', path: '/carts/:id' },
  addItem: { name: 'Cart.AddItem', path: '/carts/:id/items' },
  removeItem: { name: 'Cart.RemoveItem', path: '/carts/:id/items/:itemId' },
  clear: { name: 'Cart.Clear', path: '/carts/:id/items' },
} as const;

export type CartRpcName = (typeof CartRpcs)[keyof typeof CartRpcs]['name'];

export const cartRpcClient = createRpcClient(CartRpcs);

export function toCartRpcError(cause: unknown): OrderCartRpcError {
  return new OrderCartRpcError(String(cause));
}
");
}

#[test]
fn test_full_generation_paths_minimal() {
    let artifacts = DomainGenerator::new(WorkspaceContext::default())
        .generate(&DomainSpec::new("product"))
        .unwrap();

    let paths: Vec<&str> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "src/lib/.gitkeep",
            "src/lib/entities.ts",
            "src/lib/errors.ts",
            "src/lib/events.ts",
            "src/lib/ports.ts",
            "src/index.ts",
        ]
    );
}

#[test]
fn test_full_generation_paths_with_options_and_submodules() {
    let spec = DomainSpec::new("order")
        .with_cqrs()
        .with_rpc()
        .with_submodules(["cart"]);
    let artifacts = DomainGenerator::new(WorkspaceContext::default())
        .generate(&spec)
        .unwrap();

    let paths: Vec<&str> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "src/lib/.gitkeep",
            "src/lib/entities.ts",
            "src/lib/errors.ts",
            "src/lib/events.ts",
            "src/lib/ports.ts",
            "src/lib/commands.ts",
            "src/lib/queries.ts",
            "src/lib/projections.ts",
            "src/lib/rpc-definitions.ts",
            "src/index.ts",
            "src/lib/cart/entities.ts",
            "src/lib/cart/errors.ts",
            "src/lib/cart/queries.ts",
            "src/lib/cart/rpc-definitions.ts",
            "src/lib/cart/index.ts",
        ]
    );
}

#[test]
fn test_platform_selects_transport_import() {
    let node = render(
        Template::RpcDefinitions,
        "product",
        DomainSpec::new("product").with_rpc(),
    );
    assert!(node.contains("from '@strata/rpc-node';"));

    let edge = render(
        Template::RpcDefinitions,
        "product",
        DomainSpec::new("product").with_rpc().with_platform(Platform::Edge),
    );
    assert!(edge.contains("from '@strata/rpc-edge';"));
    assert!(!edge.contains("rpc-node"));
}

#[test]
fn test_scoped_module_paths() {
    let variant = NameVariants::resolve("cart").unwrap();
    let options = RenderOptions::new(DomainSpec::new("order"))
        .with_workspace(WorkspaceContext::new("@acme", "."));
    let content = render_file(Template::SubmoduleEntities, &variant, &options).unwrap();
    assert!(content.contains("@module @acme/order/cart"));
}
