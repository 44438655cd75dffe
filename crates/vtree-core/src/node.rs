//! The resolved dependency tree.

use std::fmt;

use serde::Serialize;

use crate::dependency::{ArtifactCoordinate, Scope};

/// A node in a resolved dependency tree.
///
/// Children are owned by value, so a `DependencyNode` is always a tree: no
/// node can have two parents and no cycle can be built. Child order is the
/// resolution order and is preserved by every traversal.
///
/// Nodes are assembled with the builder methods and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNode {
    artifact: ArtifactCoordinate,
    scope: Scope,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    optional: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    omitted: bool,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(artifact: ArtifactCoordinate, scope: Scope) -> Self {
        Self {
            artifact,
            scope,
            optional: false,
            omitted: false,
            children: Vec::new(),
        }
    }

    /// Mark this node as an optional dependency.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Mark this node as a repeat of an artifact already expanded elsewhere
    /// in the tree. Such nodes are leaves.
    pub fn omitted(mut self, omitted: bool) -> Self {
        self.omitted = omitted;
        self
    }

    /// Append a child after any existing ones.
    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, keeping their order.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = DependencyNode>,
    {
        self.children.extend(children);
        self
    }

    pub fn artifact(&self) -> &ArtifactCoordinate {
        &self.artifact
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_omitted(&self) -> bool {
        self.omitted
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path counted in edges.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order traversal yielding each node with its depth (root is 0).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![(self, 0)],
        }
    }
}

/// `group:artifact:type[:classifier]:version:scope`
impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.artifact, self.scope)
    }
}

/// Pre-order iterator over a [`DependencyNode`] subtree.
pub struct Iter<'a> {
    stack: Vec<(&'a DependencyNode, usize)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a DependencyNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        Some((node, depth))
    }
}
