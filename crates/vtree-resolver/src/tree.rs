//! Rendering of a resolved dependency tree.
//!
//! The serializer does no I/O: it turns a borrowed tree into an owned
//! `String`. An absent root renders as the empty string in every format.

use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use vtree_core::node::DependencyNode;
use vtree_util::errors::VtreeError;

/// Output format of a rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeFormat {
    /// Indented lines with box-drawing connectors.
    #[default]
    Text,
    /// Pretty-printed nested JSON objects.
    Json,
}

impl fmt::Display for TreeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeFormat::Text => f.write_str("text"),
            TreeFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for TreeFormat {
    type Err = VtreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(TreeFormat::Text),
            "json" => Ok(TreeFormat::Json),
            other => Err(VtreeError::InvalidArgument {
                message: format!("unknown tree format '{other}' (expected text or json)"),
            }),
        }
    }
}

/// Renders [`DependencyNode`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSerializer {
    format: TreeFormat,
    max_depth: Option<usize>,
}

impl TreeSerializer {
    pub fn new(format: TreeFormat) -> Self {
        Self {
            format,
            max_depth: None,
        }
    }

    /// Stop descending below `depth` (the root is depth 0).
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Render `root`. Returns an empty string when there is no tree.
    pub fn serialize(&self, root: Option<&DependencyNode>) -> String {
        let Some(root) = root else {
            return String::new();
        };
        match self.format {
            TreeFormat::Text => self.render_text(root),
            TreeFormat::Json => self.render_json(root),
        }
    }

    fn render_text(&self, root: &DependencyNode) -> String {
        let mut output = String::new();
        push_line(&mut output, "", root);
        self.render_children(&mut output, root, "", 0);
        output
    }

    fn render_children(&self, output: &mut String, node: &DependencyNode, prefix: &str, depth: usize) {
        if self.max_depth.is_some_and(|max| depth >= max) {
            return;
        }
        let count = node.children().len();
        for (i, child) in node.children().iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };
            push_line(output, &format!("{prefix}{connector}"), child);

            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            self.render_children(output, child, &child_prefix, depth + 1);
        }
    }

    fn render_json(&self, root: &DependencyNode) -> String {
        let limited = DepthLimited {
            node: root,
            remaining: self.max_depth,
        };
        match serde_json::to_string_pretty(&limited) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to render dependency tree as JSON");
                String::new()
            }
        }
    }
}

fn push_line(output: &mut String, lead: &str, node: &DependencyNode) {
    output.push_str(lead);
    output.push_str(&node.to_string());
    if node.is_optional() {
        output.push_str(" (optional)");
    }
    if node.is_omitted() {
        output.push_str(" (omitted for duplicate)");
    }
    output.push('\n');
}

/// Serializes a node with its children cut off after `remaining` levels.
struct DepthLimited<'a> {
    node: &'a DependencyNode,
    remaining: Option<usize>,
}

impl Serialize for DepthLimited<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children: Vec<DepthLimited<'_>> = match self.remaining {
            Some(0) => Vec::new(),
            remaining => self
                .node
                .children()
                .iter()
                .map(|node| DepthLimited {
                    node,
                    remaining: remaining.map(|r| r - 1),
                })
                .collect(),
        };

        let mut state = serializer.serialize_struct("DependencyNode", 5)?;
        state.serialize_field("artifact", self.node.artifact())?;
        state.serialize_field("scope", &self.node.scope())?;
        if self.node.is_optional() {
            state.serialize_field("optional", &true)?;
        } else {
            state.skip_field("optional")?;
        }
        if self.node.is_omitted() {
            state.serialize_field("omitted", &true)?;
        } else {
            state.skip_field("omitted")?;
        }
        state.serialize_field("children", &children)?;
        state.end()
    }
}
