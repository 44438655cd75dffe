//! Offline resolver that rebuilds the dependency tree from `Vtree.lock`.
//!
//! The lockfile records what an earlier, full resolution produced: one entry
//! per artifact with its direct dependencies. Expanding it from the project's
//! declared dependencies yields the same tree without touching a repository.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use vtree_core::dependency::{ArtifactCoordinate, Scope};
use vtree_core::lockfile::{LockedDependencyRef, LockedPackage, Lockfile};
use vtree_core::node::DependencyNode;
use vtree_core::project::Project;

use vtree_util::errors::VtreeResult;

use crate::resolver::{DependencyResolver, ResolutionError};

/// Resolves projects against a parsed lockfile.
#[derive(Debug, Clone, Default)]
pub struct LockfileResolver {
    lockfile: Lockfile,
}

impl LockfileResolver {
    pub fn new(lockfile: Lockfile) -> Self {
        Self { lockfile }
    }

    /// Load `Vtree.lock` next to the project's manifest.
    ///
    /// A missing lockfile behaves like an empty one, so every declared
    /// dependency is reported as unresolved. A malformed one is an error.
    pub fn for_project(project: &Project) -> VtreeResult<Self> {
        let path = project.lockfile_path();
        if path.is_file() {
            Ok(Self::new(Lockfile::from_path(&path)?))
        } else {
            tracing::warn!(path = %path.display(), "no lockfile found");
            Ok(Self::default())
        }
    }

    /// The locked package behind `dep` as seen from a parent resolved in
    /// `scope`, with its propagated scope. `Ok(None)` means the ref is not
    /// followed (optional, or its scope does not propagate); `Err` carries
    /// the coordinate of a ref with no lockfile entry.
    fn follow(
        &self,
        scope: Scope,
        dep: &LockedDependencyRef,
    ) -> Result<Option<(&LockedPackage, Scope)>, ArtifactCoordinate> {
        if dep.optional {
            return Ok(None);
        }
        let Some(child_scope) = Scope::transitive(scope, dep.scope.unwrap_or_default()) else {
            return Ok(None);
        };
        match self.lockfile.find(&dep.key()) {
            Some(child) => Ok(Some((child, child_scope))),
            None => Err(dep.coordinate()),
        }
    }

    /// Reject trees whose expansion would loop.
    ///
    /// Only edges reachable from `roots` and actually followed during
    /// expansion are considered, so cycles through optional refs, dropped
    /// scopes or packages nothing depends on are harmless.
    fn check_acyclic(&self, roots: &[(&LockedPackage, Scope)]) -> Result<(), ResolutionError> {
        let mut graph: DiGraph<String, ()> = DiGraph::new();
        let mut index: HashMap<(String, Scope), NodeIndex> = HashMap::new();
        let mut queue: VecDeque<(&LockedPackage, Scope, NodeIndex)> = VecDeque::new();

        for &(pkg, scope) in roots {
            let key = pkg.key();
            if let Entry::Vacant(slot) = index.entry((key.clone(), scope)) {
                let idx = graph.add_node(key);
                slot.insert(idx);
                queue.push_back((pkg, scope, idx));
            }
        }

        while let Some((pkg, scope, from)) = queue.pop_front() {
            for dep in &pkg.dependencies {
                let Ok(Some((child, child_scope))) = self.follow(scope, dep) else {
                    continue;
                };
                let key = child.key();
                let to = match index.entry((key.clone(), child_scope)) {
                    Entry::Occupied(slot) => *slot.get(),
                    Entry::Vacant(slot) => {
                        let idx = graph.add_node(key);
                        slot.insert(idx);
                        queue.push_back((child, child_scope, idx));
                        idx
                    }
                };
                graph.add_edge(from, to, ());
            }
        }

        toposort(&graph, None).map(|_| ()).map_err(|cycle| {
            ResolutionError::Cycle {
                artifact: graph[cycle.node_id()].clone(),
            }
        })
    }

    /// Expand `pkg` depth-first. An artifact already expanded anywhere in
    /// the tree becomes a childless node marked omitted.
    fn expand(
        &self,
        pkg: &LockedPackage,
        scope: Scope,
        optional: bool,
        seen: &mut HashSet<String>,
        unresolved: &mut Vec<ArtifactCoordinate>,
    ) -> DependencyNode {
        let node = DependencyNode::new(pkg.coordinate(), scope).optional(optional);
        if !seen.insert(pkg.key()) {
            return node.omitted(true);
        }

        let mut children = Vec::with_capacity(pkg.dependencies.len());
        for dep in &pkg.dependencies {
            match self.follow(scope, dep) {
                Ok(Some((child, child_scope))) => {
                    children.push(self.expand(child, child_scope, false, seen, unresolved));
                }
                Ok(None) => {}
                Err(coord) => record(unresolved, coord),
            }
        }
        node.with_children(children)
    }
}

fn record(unresolved: &mut Vec<ArtifactCoordinate>, coord: ArtifactCoordinate) {
    if !unresolved.contains(&coord) {
        unresolved.push(coord);
    }
}

impl DependencyResolver for LockfileResolver {
    fn resolve(&self, project: &Project) -> Result<DependencyNode, ResolutionError> {
        let mut unresolved = Vec::new();
        let mut roots = Vec::new();

        for dep in &project.manifest.dependencies {
            // Coordinates were validated when the manifest was parsed.
            let Some(coord) = dep.coordinate() else {
                continue;
            };
            match self.lockfile.find(&coord.key()) {
                Some(pkg) => {
                    if pkg.version != coord.version {
                        tracing::debug!(
                            dependency = %coord.key(),
                            declared = %coord.version,
                            locked = %pkg.version,
                            "using locked version"
                        );
                    }
                    roots.push((pkg, dep.scope(), dep.is_optional()));
                }
                None => record(&mut unresolved, coord),
            }
        }

        let scoped: Vec<_> = roots.iter().map(|&(pkg, scope, _)| (pkg, scope)).collect();
        self.check_acyclic(&scoped)?;

        let mut seen = HashSet::new();
        let children: Vec<_> = roots
            .into_iter()
            .map(|(pkg, scope, optional)| {
                self.expand(pkg, scope, optional, &mut seen, &mut unresolved)
            })
            .collect();

        if !unresolved.is_empty() {
            return Err(ResolutionError::Unresolved { unresolved });
        }

        Ok(DependencyNode::new(project.manifest.coordinate(), Scope::Compile).with_children(children))
    }
}
