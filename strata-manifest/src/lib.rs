//! Domain spec types and `strata.toml` parsing for the strata generator.
//!
//! The manifest is the caller-facing input boundary: a [`DomainSpec`]
//! describing what to scaffold and a [`WorkspaceContext`] describing
//! where. The engine itself never reads files or the environment; this
//! crate is where TOML input turns into those explicit values.

mod error;
mod manifest;
mod spec;

pub use error::{Error, Result};
pub use manifest::{Manifest, StrataToml};
pub use spec::{DomainSpec, Platform, WorkspaceContext};
