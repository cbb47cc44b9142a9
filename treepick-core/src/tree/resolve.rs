//! src/tree/resolve.rs
//! ============================================================================
//! # Selection resolver
//!
//! Turns "activate line N" into an outcome by walking the tree with the same
//! numbering as the renderer. Toggling a directory changes the numbering of
//! every later line, so the walk breaks out right after the toggle.

use std::ops::ControlFlow;
use std::path::PathBuf;

use crate::{model::node::Node, tree::walk::walk_mut};

/// Result of activating a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A directory flipped its expansion; the walk was abandoned.
    Toggled { path: PathBuf, expanded: bool },

    /// A file was picked; the session should end with this path.
    Activated(PathBuf),

    /// No node owns the line (stale selection after the tree shrank).
    NotFound,
}

/// Locate the node on `target` and act on it.
pub fn resolve(root: &mut Node, target: usize) -> Resolution {
    let flow = walk_mut(root, |node, pos| {
        if pos.line != target {
            return ControlFlow::Continue(());
        }

        if node.is_dir() {
            let expanded = node.toggle_expanded();
            ControlFlow::Break(Resolution::Toggled {
                path: node.full_path().to_path_buf(),
                expanded,
            })
        } else {
            ControlFlow::Break(Resolution::Activated(node.full_path().to_path_buf()))
        }
    });

    match flow {
        ControlFlow::Break(resolution) => resolution,
        ControlFlow::Continue(()) => Resolution::NotFound,
    }
}
