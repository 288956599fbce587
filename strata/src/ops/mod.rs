//! Core operations.
//!
//! Business logic for strata commands, separated from CLI argument
//! parsing and output rendering.

pub mod new;
pub mod preview;

pub use new::new;
pub use preview::preview;
