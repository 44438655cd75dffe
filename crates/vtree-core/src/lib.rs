//! Core data types for vtree.
//!
//! This crate defines the resolved dependency tree model ([`node::DependencyNode`]),
//! Maven-style artifact coordinates and scopes, and the on-disk project
//! description: `Vtree.toml` manifests and `Vtree.lock` lockfiles.
//!
//! This crate does no resolution and no output I/O.

/// Manifest file name looked up in the project directory.
pub const MANIFEST_FILE: &str = "Vtree.toml";

/// Lockfile file name looked up next to the manifest.
pub const LOCKFILE_FILE: &str = "Vtree.lock";

pub mod dependency;
pub mod lockfile;
pub mod manifest;
pub mod node;
pub mod project;
