//! src/model/node.rs
//! ============================================================================
//! # `Node`: one entry of the browsed directory tree
//!
//! The tree is built once before the UI starts. Afterwards the only mutation
//! is flipping `expanded` on a directory; nodes are never added or removed.

use compact_str::CompactString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: CompactString,
    full_path: PathBuf,
    is_dir: bool,
    expanded: bool,
    children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn file(name: impl Into<CompactString>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            is_dir: false,
            expanded: false,
            children: Vec::new(),
        }
    }

    /// A collapsed directory owning `children` in enumeration order.
    #[must_use]
    pub fn directory(
        name: impl Into<CompactString>,
        full_path: impl Into<PathBuf>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            is_dir: true,
            expanded: false,
            children,
        }
    }

    /// Builder-style expansion; ignored for files.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded && self.is_dir;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// True when the walk descends into this node's children.
    pub const fn shows_children(&self) -> bool {
        self.is_dir && self.expanded
    }

    /// Flip expansion and return the new state. Files stay collapsed.
    pub fn toggle_expanded(&mut self) -> bool {
        if self.is_dir {
            self.expanded = !self.expanded;
        }
        self.expanded
    }

    /// Total number of nodes in this subtree, hidden ones included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}
