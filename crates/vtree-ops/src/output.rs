//! Persisting rendered trees.

use std::io::Write;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use vtree_util::fs::{display_slash, ensure_dir};

/// Where a rendered tree is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// Human-readable name for logs.
    pub fn describe(&self) -> String {
        match self {
            OutputTarget::File(path) => display_slash(path),
            OutputTarget::Stdout => "<stdout>".to_string(),
        }
    }
}

/// Failure to persist a rendered tree.
#[derive(Debug, Error, Diagnostic)]
pub enum OutputError {
    #[error("Failed to create directory {}: {source}", display_slash(.path))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to file: {}: {source}", display_slash(.path))]
    #[diagnostic(help("Check that the destination is writable or pass --output-file"))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to standard output: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Write `content` to `target`, creating parent directories as needed.
///
/// On success the full content has been flushed and can be read back.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<(), OutputError> {
    match target {
        OutputTarget::File(path) => write_file(path, content),
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(OutputError::Stdout)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %display_slash(path), bytes = content.len(), "tree written");
    Ok(())
}
