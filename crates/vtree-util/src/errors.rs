use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for failures outside the best-effort tree pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum VtreeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Vtree.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Vtree.toml for syntax errors"))]
    Manifest { message: String },

    /// Invalid or malformed lockfile (Vtree.lock).
    #[error("Lockfile error: {message}")]
    #[diagnostic(help("Regenerate Vtree.lock or fix its syntax"))]
    Lockfile { message: String },

    /// An argument could not be interpreted (bad coordinate, unknown format, ...).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

}

/// Convenience alias for `miette::Result<T>`.
pub type VtreeResult<T> = miette::Result<T>;
