use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Packaging type assumed when a coordinate does not name one.
pub const DEFAULT_EXTENSION: &str = "jar";

/// A dependency specification in Vtree.toml.
///
/// Supports a bare shorthand string (`"group:artifact:version"`), a table
/// with a `coordinate` key, and the fully detailed form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    Short(String),
    Coordinate(CoordinateDependency),
    Detailed(DetailedDependency),
}

/// A shorthand coordinate with optional scope metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateDependency {
    pub coordinate: String,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub optional: bool,
}

/// A dependency with explicit group, artifact, version, and optional metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedDependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default, rename = "type")]
    pub extension: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

impl Dependency {
    /// The artifact coordinate this dependency points at, if well formed.
    pub fn coordinate(&self) -> Option<ArtifactCoordinate> {
        match self {
            Dependency::Short(s) => ArtifactCoordinate::parse(s),
            Dependency::Coordinate(c) => ArtifactCoordinate::parse(&c.coordinate),
            Dependency::Detailed(d) => {
                let mut coord = ArtifactCoordinate::new(&d.group, &d.artifact, &d.version);
                if let Some(ext) = &d.extension {
                    coord = coord.with_extension(ext);
                }
                if let Some(classifier) = &d.classifier {
                    coord = coord.with_classifier(classifier);
                }
                Some(coord)
            }
        }
    }

    /// Declared scope, `compile` when not given.
    pub fn scope(&self) -> Scope {
        match self {
            Dependency::Short(_) => Scope::default(),
            Dependency::Coordinate(c) => c.scope.unwrap_or_default(),
            Dependency::Detailed(d) => d.scope.unwrap_or_default(),
        }
    }

    pub fn is_optional(&self) -> bool {
        match self {
            Dependency::Short(_) => false,
            Dependency::Coordinate(c) => c.optional,
            Dependency::Detailed(d) => d.optional,
        }
    }
}

/// Maven-compatible dependency scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Runtime,
    Provided,
    Test,
    System,
    Import,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Runtime => "runtime",
            Scope::Provided => "provided",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
        }
    }

    /// Scope a transitive dependency ends up with, following Maven's
    /// propagation table. `None` means the dependency is not inherited.
    pub fn transitive(parent: Scope, child: Scope) -> Option<Scope> {
        match child {
            Scope::Provided | Scope::Test | Scope::System | Scope::Import => None,
            Scope::Compile | Scope::Runtime => match parent {
                Scope::Compile => Some(child),
                Scope::Runtime => Some(Scope::Runtime),
                Scope::Provided => Some(Scope::Provided),
                Scope::Test => Some(Scope::Test),
                Scope::System | Scope::Import => None,
            },
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known scope name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dependency scope '{0}'")]
pub struct UnknownScope(pub String);

impl FromStr for Scope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compile" => Ok(Scope::Compile),
            "runtime" => Ok(Scope::Runtime),
            "provided" => Ok(Scope::Provided),
            "test" => Ok(Scope::Test),
            "system" => Ok(Scope::System),
            "import" => Ok(Scope::Import),
            _ => Err(UnknownScope(s.to_string())),
        }
    }
}

/// Identifying tuple of a resolvable artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArtifactCoordinate {
    #[serde(rename = "group")]
    pub group_id: String,
    #[serde(rename = "artifact")]
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type")]
    pub extension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ArtifactCoordinate {
    /// A `jar` coordinate without classifier.
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            classifier: None,
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }

    /// Parse `g:a:v`, `g:a:type:v` or `g:a:type:classifier:v`.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        match parts.as_slice() {
            [g, a, v] => Some(Self::new(g, a, v)),
            [g, a, t, v] => Some(Self::new(g, a, v).with_extension(t)),
            [g, a, t, c, v] => Some(Self::new(g, a, v).with_extension(t).with_classifier(c)),
            _ => None,
        }
    }

    /// `group:artifact` identifier (without version).
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", self.version)
    }
}
