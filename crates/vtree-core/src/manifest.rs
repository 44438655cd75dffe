use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vtree_util::errors::{VtreeError, VtreeResult};

use crate::dependency::{ArtifactCoordinate, Dependency, DEFAULT_EXTENSION};

/// The parsed representation of a `Vtree.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    /// Declared dependencies from `[[dependencies]]`, in manifest order.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub workspace: Option<WorkspaceConfig>,
}

/// Project identity from the `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_packaging() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Tree output settings from the `[tree]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Overrides the default `target/tree.txt` destination.
    #[serde(default, rename = "output-file")]
    pub output_file: Option<PathBuf>,
    /// `text` or `json`.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub depth: Option<usize>,
}

/// Multi-module configuration from the `[workspace]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub members: Vec<String>,
}

impl Manifest {
    /// Load and parse a `Vtree.toml` file from the given path.
    pub fn from_path(path: &Path) -> VtreeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VtreeError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a `Vtree.toml` from a string.
    pub fn parse_toml(content: &str) -> VtreeResult<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| VtreeError::Manifest {
            message: format!("Failed to parse Vtree.toml: {e}"),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> VtreeResult<()> {
        for dep in &self.dependencies {
            if dep.coordinate().is_none() {
                return Err(VtreeError::Manifest {
                    message: format!("Invalid dependency coordinate: {dep:?}"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Coordinate of the project itself.
    pub fn coordinate(&self) -> ArtifactCoordinate {
        ArtifactCoordinate::new(
            &self.project.group,
            &self.project.name,
            &self.project.version,
        )
        .with_extension(&self.project.packaging)
    }

    /// Names of workspace members; empty for a single-module project.
    pub fn workspace_members(&self) -> &[String] {
        self.workspace
            .as_ref()
            .map(|w| w.members.as_slice())
            .unwrap_or(&[])
    }
}
