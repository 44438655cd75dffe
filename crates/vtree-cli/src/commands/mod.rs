//! Command dispatch and handler modules.

mod tree;

use vtree_util::errors::VtreeResult;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> VtreeResult<()> {
    match cli.command {
        Command::Tree {
            output_file,
            stdout,
            format,
            depth,
        } => tree::exec(output_file, stdout, format.as_deref(), depth),
    }
}
