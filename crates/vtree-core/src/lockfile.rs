use serde::Deserialize;
use std::path::Path;

use vtree_util::errors::{VtreeError, VtreeResult};

use crate::dependency::{ArtifactCoordinate, Scope, DEFAULT_EXTENSION};

/// Lockfile recording the exact graph an earlier resolution produced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lockfile {
    #[serde(default)]
    pub package: Vec<LockedPackage>,
}

/// A single locked artifact with its resolved coordinates and direct dependencies.
#[derive(Debug, Clone, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub group: String,
    pub version: String,
    #[serde(default, rename = "type")]
    pub extension: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub checksum: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<LockedDependencyRef>,
}

/// A reference from one locked package to one of its dependencies.
#[derive(Debug, Clone, Deserialize)]
pub struct LockedDependencyRef {
    pub name: String,
    pub group: String,
    pub version: String,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub optional: bool,
}

impl LockedPackage {
    /// `group:name` identifier (without version).
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    pub fn coordinate(&self) -> ArtifactCoordinate {
        let mut coord = ArtifactCoordinate::new(&self.group, &self.name, &self.version)
            .with_extension(self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION));
        if let Some(classifier) = &self.classifier {
            coord = coord.with_classifier(classifier);
        }
        coord
    }
}

impl LockedDependencyRef {
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    pub fn coordinate(&self) -> ArtifactCoordinate {
        ArtifactCoordinate::new(&self.group, &self.name, &self.version)
    }
}

impl Lockfile {
    /// Load and parse a `Vtree.lock` file from the given path.
    pub fn from_path(path: &Path) -> VtreeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VtreeError::Lockfile {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a `Vtree.lock` from a string.
    pub fn parse_toml(content: &str) -> VtreeResult<Self> {
        toml::from_str(content).map_err(|e| {
            VtreeError::Lockfile {
                message: format!("Failed to parse lockfile: {e}"),
            }
            .into()
        })
    }

    /// Find a locked package by `group:name`.
    pub fn find(&self, key: &str) -> Option<&LockedPackage> {
        self.package.iter().find(|p| p.key() == key)
    }
}
