//! Shared utilities for vtree.
//!
//! Cross-cutting concerns used by the other vtree crates: the unified error
//! type and a few filesystem helpers.

pub mod errors;
pub mod fs;
