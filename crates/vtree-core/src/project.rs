use std::path::{Path, PathBuf};

use vtree_util::errors::VtreeResult;

use crate::manifest::Manifest;
use crate::{LOCKFILE_FILE, MANIFEST_FILE};

/// Directory, relative to the project root, that receives build output.
pub const TARGET_DIR: &str = "target";

/// File name of the default tree rendering inside [`TARGET_DIR`].
pub const DEFAULT_TREE_FILE: &str = "tree.txt";

/// A project on disk: one `Vtree.toml` manifest plus the directory it lives in.
#[derive(Debug, Clone)]
pub struct Project {
    pub manifest: Manifest,
    pub root_dir: PathBuf,
}

impl Project {
    /// Load the project whose manifest sits directly in `root_dir`.
    pub fn load(root_dir: &Path) -> VtreeResult<Self> {
        let manifest = Manifest::from_path(&root_dir.join(MANIFEST_FILE))?;
        Ok(Self {
            manifest,
            root_dir: root_dir.to_path_buf(),
        })
    }

    /// Returns the project name from the manifest.
    pub fn name(&self) -> &str {
        &self.manifest.project.name
    }

    /// `group:name:version`, used to identify the project in logs.
    pub fn id(&self) -> String {
        format!(
            "{}:{}:{}",
            self.manifest.project.group, self.manifest.project.name, self.manifest.project.version
        )
    }

    /// Returns the path to the build output directory.
    pub fn target_dir(&self) -> PathBuf {
        self.root_dir.join(TARGET_DIR)
    }

    pub fn lockfile_path(&self) -> PathBuf {
        self.root_dir.join(LOCKFILE_FILE)
    }

    /// Where the tree goes when nothing overrides it: `<root>/target/tree.txt`.
    pub fn default_tree_path(&self) -> PathBuf {
        self.target_dir().join(DEFAULT_TREE_FILE)
    }

    /// Destination for the tree: an explicit override wins, then
    /// `[tree] output-file`, then [`Project::default_tree_path`].
    /// Relative paths are taken relative to the project root.
    pub fn tree_output_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit.or(self.manifest.tree.output_file.as_deref()) {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => self.root_dir.join(path),
            None => self.default_tree_path(),
        }
    }

    /// Whether the project declares workspace members.
    pub fn is_multi_module(&self) -> bool {
        !self.manifest.workspace_members().is_empty()
    }
}
