//! Handler for `vtree tree`.

use std::path::PathBuf;

use vtree_core::project::Project;
use vtree_core::MANIFEST_FILE;
use vtree_ops::ops_tree::{self, TreeOptions};
use vtree_ops::output::OutputTarget;
use vtree_resolver::lockfile::LockfileResolver;
use vtree_resolver::tree::TreeFormat;
use vtree_util::errors::{VtreeError, VtreeResult};
use vtree_util::fs::find_ancestor_with;

pub fn exec(
    output_file: Option<PathBuf>,
    stdout: bool,
    format: Option<&str>,
    depth: Option<u32>,
) -> VtreeResult<()> {
    let cwd = std::env::current_dir().map_err(VtreeError::Io)?;
    let project_root = find_ancestor_with(&cwd, MANIFEST_FILE).ok_or_else(|| {
        VtreeError::Manifest {
            message: format!("Could not find {MANIFEST_FILE} in {} or any parent", cwd.display()),
        }
    })?;

    let project = Project::load(&project_root)?;
    let settings = &project.manifest.tree;

    let format = match format.or(settings.format.as_deref()) {
        Some(f) => f.parse::<TreeFormat>()?,
        None => TreeFormat::default(),
    };

    let opts = TreeOptions {
        output_file,
        stdout,
        format,
        depth: depth.map(|d| d as usize).or(settings.depth),
    };

    let resolver = LockfileResolver::for_project(&project)?;
    let report = ops_tree::tree(&project, &resolver, &opts);

    if let (OutputTarget::File(path), None) = (&report.target, &report.output_error) {
        println!("Wrote dependency tree to {}", path.display());
    }

    Ok(())
}
