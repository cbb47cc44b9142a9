//! ``src/fs/tree_builder.rs``
//!
//! # `Tree Builder`: one-shot recursive directory read
//!
//! Produces the whole [`Node`] tree before the UI starts. Listing goes through
//! the [`DirLister`] trait so the policy for unreadable directories can be
//! exercised without touching real permissions.

use std::{
    ffi::OsString,
    fs, io,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use compact_str::CompactString;
use tracing::{debug, info, warn};

use crate::{config::UnreadableDirs, error::AppError, model::node::Node};

/// One immediate child as reported by a [`DirLister`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: OsString,
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Source of directory listings.
pub trait DirLister {
    /// Immediate entries of `path` in enumeration order, without `.` and `..`.
    fn list(&self, path: &Path) -> io::Result<Vec<ListedEntry>>;
}

/// Lists the real filesystem with `std::fs::read_dir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<ListedEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry in {:?}: {}", path, e);
                    continue;
                }
            };

            // file_type() does not follow symlinks: a link to a directory is a leaf
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(ListedEntry::new(entry.file_name(), is_dir));
        }

        Ok(entries)
    }
}

/// Knobs that shape the built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub show_hidden: bool,
    pub expand_root: bool,
    pub unreadable_dirs: UnreadableDirs,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            show_hidden: true,
            expand_root: true,
            unreadable_dirs: UnreadableDirs::Empty,
        }
    }
}

pub struct TreeBuilder<L> {
    lister: L,
    options: BuildOptions,
}

impl TreeBuilder<FsLister> {
    pub fn from_fs(options: BuildOptions) -> Self {
        Self::new(FsLister, options)
    }
}

impl<L: DirLister> TreeBuilder<L> {
    pub const fn new(lister: L, options: BuildOptions) -> Self {
        Self { lister, options }
    }

    /// Build the tree rooted at `root`. The root label is the path as given.
    ///
    /// Only the root may fail; every deeper listing error is absorbed
    /// according to [`UnreadableDirs`].
    pub fn build(&self, root: &Path) -> Result<Node, AppError> {
        let entries = self.lister.list(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotADirectory => AppError::RootNotDirectory(root.to_path_buf()),
            _ => AppError::root_unreadable(root, e),
        })?;

        let children = self.build_children(root, entries);
        let node = Node::directory(&*root.to_string_lossy(), root, children)
            .with_expanded(self.options.expand_root);

        info!(
            "Built tree for {}: {} nodes",
            root.display(),
            node.subtree_len()
        );

        Ok(node)
    }

    fn build_children(&self, parent: &Path, entries: Vec<ListedEntry>) -> Vec<Node> {
        let mut children = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.name == "." || entry.name == ".." {
                continue;
            }

            let name = CompactString::from(&*entry.name.to_string_lossy());
            if !self.options.show_hidden && name.starts_with('.') {
                continue;
            }

            let path: PathBuf = parent.join(&entry.name);

            if !entry.is_dir {
                children.push(Node::file(name, path));
                continue;
            }

            match self.lister.list(&path) {
                Ok(grand) => {
                    let grand = self.build_children(&path, grand);
                    children.push(Node::directory(name, path, grand));
                }
                Err(e) => {
                    warn!("Cannot read directory {:?}: {}", path, e);
                    if self.options.unreadable_dirs == UnreadableDirs::Empty {
                        children.push(Node::directory(name, path, Vec::new()));
                    }
                }
            }
        }

        children
    }
}

/// Strip trailing separators from a command-line path. A bare root stays put.
pub fn normalize_root(raw: &str) -> PathBuf {
    let trimmed = raw.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.is_empty() && !raw.is_empty() {
        PathBuf::from(&raw[..1])
    } else if trimmed.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory listing; paths missing from the map fail with `PermissionDenied`.
    struct FakeLister(HashMap<PathBuf, Vec<ListedEntry>>);

    impl FakeLister {
        fn new(dirs: Vec<(&str, Vec<(&str, bool)>)>) -> Self {
            Self(
                dirs.into_iter()
                    .map(|(dir, entries)| {
                        let entries = entries
                            .into_iter()
                            .map(|(name, is_dir)| ListedEntry::new(name, is_dir))
                            .collect();
                        (PathBuf::from(dir), entries)
                    })
                    .collect(),
            )
        }
    }

    impl DirLister for FakeLister {
        fn list(&self, path: &Path) -> io::Result<Vec<ListedEntry>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    fn lister() -> FakeLister {
        FakeLister::new(vec![
            (
                "root",
                vec![
                    ("dirA", true),
                    ("file1", false),
                    (".hidden", false),
                    ("dirB", true),
                    (".", true),
                    ("..", true),
                ],
            ),
            ("root/dirA", vec![("a1", false)]),
        ])
    }

    fn names(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::name).collect()
    }

    #[test]
    fn keeps_enumeration_order_and_drops_dot_entries() {
        let tree = TreeBuilder::new(lister(), BuildOptions::default())
            .build(Path::new("root"))
            .unwrap();

        assert_eq!(tree.name(), "root");
        assert!(tree.is_expanded());
        assert_eq!(names(tree.children()), vec!["dirA", "file1", ".hidden", "dirB"]);
        assert_eq!(
            tree.children()[0].children()[0].full_path(),
            Path::new("root/dirA/a1")
        );
    }

    #[test]
    fn unreadable_directory_is_an_empty_node_by_default() {
        let tree = TreeBuilder::new(lister(), BuildOptions::default())
            .build(Path::new("root"))
            .unwrap();

        let dir_b = &tree.children()[3];
        assert_eq!(dir_b.name(), "dirB");
        assert!(dir_b.is_dir());
        assert!(dir_b.children().is_empty());
    }

    #[test]
    fn unreadable_directory_can_be_omitted() {
        let options = BuildOptions {
            unreadable_dirs: UnreadableDirs::Omit,
            ..BuildOptions::default()
        };
        let tree = TreeBuilder::new(lister(), options)
            .build(Path::new("root"))
            .unwrap();

        assert_eq!(names(tree.children()), vec!["dirA", "file1", ".hidden"]);
    }

    #[test]
    fn hidden_entries_can_be_skipped() {
        let options = BuildOptions {
            show_hidden: false,
            expand_root: false,
            ..BuildOptions::default()
        };
        let tree = TreeBuilder::new(lister(), options)
            .build(Path::new("root"))
            .unwrap();

        assert!(!tree.is_expanded());
        assert_eq!(names(tree.children()), vec!["dirA", "file1", "dirB"]);
    }

    #[test]
    fn unreadable_root_is_an_error() {
        let err = TreeBuilder::new(lister(), BuildOptions::default())
            .build(Path::new("elsewhere"))
            .unwrap_err();
        assert!(matches!(err, AppError::RootUnreadable { .. }));
    }

    #[test]
    fn reads_a_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("inner.txt"), "x").unwrap();
        fs::write(dir.path().join("top.txt"), "y").unwrap();

        let tree = TreeBuilder::from_fs(BuildOptions::default())
            .build(dir.path())
            .unwrap();

        let mut top = names(tree.children());
        top.sort_unstable();
        assert_eq!(top, vec!["sub", "top.txt"]);

        let sub = tree.children().iter().find(|n| n.name() == "sub").unwrap();
        assert!(sub.is_dir());
        assert_eq!(
            sub.children()[0].full_path(),
            dir.path().join("sub").join("inner.txt")
        );
    }

    #[test]
    fn a_file_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "z").unwrap();

        let err = TreeBuilder::from_fs(BuildOptions::default())
            .build(&file)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::RootNotDirectory(_) | AppError::RootUnreadable { .. }
        ));
    }

    #[test]
    fn trailing_separators_are_stripped() {
        assert_eq!(normalize_root("some/dir/"), PathBuf::from("some/dir"));
        assert_eq!(normalize_root("some/dir//"), PathBuf::from("some/dir"));
        assert_eq!(normalize_root("some/dir"), PathBuf::from("some/dir"));
        assert_eq!(normalize_root("/"), PathBuf::from("/"));
        assert_eq!(normalize_root(""), PathBuf::from("."));
    }
}
