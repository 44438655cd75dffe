//! Operation: resolve a project's dependencies and write the rendered tree.
//!
//! Resolution and output failures are logged and recorded in the
//! [`TreeReport`]; they never abort the operation. A project whose graph
//! cannot be resolved still gets its output written, with empty content.

use std::path::PathBuf;

use vtree_core::node::DependencyNode;
use vtree_core::project::Project;
use vtree_resolver::resolver::{
    build_dependency_graph, DependencyResolver, ResolutionError, ResolutionRequest,
};
use vtree_resolver::tree::{TreeFormat, TreeSerializer};

use crate::output::{write_output, OutputError, OutputTarget};

/// Options for `vtree tree`.
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Explicit destination file; falls back to the manifest, then `target/tree.txt`.
    pub output_file: Option<PathBuf>,
    /// Write to standard output instead of a file.
    pub stdout: bool,
    pub format: TreeFormat,
    /// Maximum tree depth to render.
    pub depth: Option<usize>,
}

/// Everything one `tree` run produced, including recovered failures.
#[derive(Debug)]
pub struct TreeReport {
    pub target: OutputTarget,
    pub root: Option<DependencyNode>,
    pub rendered: String,
    pub resolution_error: Option<ResolutionError>,
    pub output_error: Option<OutputError>,
}

impl TreeReport {
    /// `true` when both resolution and writing succeeded.
    pub fn is_clean(&self) -> bool {
        self.resolution_error.is_none() && self.output_error.is_none()
    }
}

/// Resolve `project` with `resolver`, render the tree and write it out.
pub fn tree(project: &Project, resolver: &dyn DependencyResolver, opts: &TreeOptions) -> TreeReport {
    tracing::info!(project = %project.id(), "building dependency tree");

    let request = ResolutionRequest::for_project(project);
    let (root, resolution_error) = match build_dependency_graph(resolver, &request) {
        Ok(root) => (Some(root), None),
        Err(e) => {
            tracing::error!(project = %project.id(), "{e}");
            (None, Some(e))
        }
    };

    if root.is_none() {
        tracing::warn!(project = %project.id(), "no dependency graph to serialize");
    }

    let serializer = TreeSerializer::new(opts.format).with_max_depth(opts.depth);
    let rendered = serializer.serialize(root.as_ref());

    let target = if opts.stdout {
        OutputTarget::Stdout
    } else {
        OutputTarget::File(project.tree_output_path(opts.output_file.as_deref()))
    };

    let output_error = match write_output(&target, &rendered) {
        Ok(()) => {
            tracing::info!(output = %target.describe(), format = %opts.format, "dependency tree written");
            None
        }
        Err(e) => {
            tracing::error!("{e}");
            Some(e)
        }
    };

    TreeReport {
        target,
        root,
        rendered,
        resolution_error,
        output_error,
    }
}
