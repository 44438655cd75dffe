//! Dependency graph resolution and rendering: the resolver seam, an offline
//! lockfile-backed resolver, and the deterministic tree serializer.

pub mod lockfile;
pub mod resolver;
pub mod tree;
