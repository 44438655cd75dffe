//! The seam between vtree and whatever engine actually resolves dependencies.
//!
//! A [`DependencyResolver`] turns a project into the root of its resolved
//! tree. [`build_dependency_graph`] wraps a resolver with the request kinds
//! vtree understands and the error reporting callers rely on.

use miette::Diagnostic;
use thiserror::Error;

use vtree_core::dependency::ArtifactCoordinate;
use vtree_core::node::DependencyNode;
use vtree_core::project::Project;

/// Failure to produce a dependency tree.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolutionError {
    /// One or more dependencies could not be resolved.
    #[error("Could not resolve following dependencies: [{}]", join(.unresolved))]
    #[diagnostic(help("Check the declared coordinates or refresh Vtree.lock"))]
    Unresolved { unresolved: Vec<ArtifactCoordinate> },

    /// Multi-module resolution was requested.
    #[error(
        "Reactor resolution is not supported yet; cannot resolve modules: [{}]",
        .members.join(", ")
    )]
    ReactorUnsupported { members: Vec<String> },

    /// The resolved graph loops back on itself.
    #[error("Dependency cycle detected involving {artifact}")]
    Cycle { artifact: String },
}

impl ResolutionError {
    /// Dependencies that could not be resolved; empty for non-lookup failures.
    pub fn unresolved(&self) -> &[ArtifactCoordinate] {
        match self {
            ResolutionError::Unresolved { unresolved } => unresolved,
            _ => &[],
        }
    }
}

fn join(coords: &[ArtifactCoordinate]) -> String {
    coords
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Computes the resolved dependency tree of a single project.
pub trait DependencyResolver {
    fn resolve(&self, project: &Project) -> Result<DependencyNode, ResolutionError>;
}

impl<F> DependencyResolver for F
where
    F: Fn(&Project) -> Result<DependencyNode, ResolutionError>,
{
    fn resolve(&self, project: &Project) -> Result<DependencyNode, ResolutionError> {
        self(project)
    }
}

/// What to resolve.
#[derive(Debug, Clone, Copy)]
pub enum ResolutionRequest<'a> {
    /// A standalone project.
    Single { project: &'a Project },
    /// A project that aggregates workspace members.
    Reactor {
        project: &'a Project,
        members: &'a [String],
    },
}

impl<'a> ResolutionRequest<'a> {
    /// Pick the request kind from the project's `[workspace]` section.
    pub fn for_project(project: &'a Project) -> Self {
        let members = project.manifest.workspace_members();
        if members.is_empty() {
            ResolutionRequest::Single { project }
        } else {
            ResolutionRequest::Reactor { project, members }
        }
    }

    pub fn project(&self) -> &'a Project {
        match self {
            ResolutionRequest::Single { project } | ResolutionRequest::Reactor { project, .. } => {
                *project
            }
        }
    }
}

/// Resolve the dependency tree for `request` using `resolver`.
///
/// Reactor requests are rejected without consulting the resolver.
pub fn build_dependency_graph(
    resolver: &dyn DependencyResolver,
    request: &ResolutionRequest<'_>,
) -> Result<DependencyNode, ResolutionError> {
    match request {
        ResolutionRequest::Single { project } => {
            tracing::debug!(project = %project.id(), "resolving dependencies");
            let root = resolver.resolve(project)?;
            tracing::debug!(
                project = %project.id(),
                nodes = root.node_count(),
                "dependency graph resolved"
            );
            Ok(root)
        }
        ResolutionRequest::Reactor { project, members } => {
            tracing::debug!(
                project = %project.id(),
                modules = members.len(),
                "reactor request rejected"
            );
            Err(ResolutionError::ReactorUnsupported {
                members: members.to_vec(),
            })
        }
    }
}
