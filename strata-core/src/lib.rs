//! Core utilities for the strata scaffolding generator.
//!
//! This crate provides fundamental building blocks used across
//! the strata workspace: identifier case conversion and the
//! file-writing primitives used when applying generated artifacts.

mod case;
mod file;

// String utilities
pub use case::{
    pluralize, split_words, to_camel_case, to_constant_case, to_kebab_case, to_pascal_case,
};
// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
