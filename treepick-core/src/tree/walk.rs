//! src/tree/walk.rs
//! ============================================================================
//! # Line walk: the one place line numbers come from
//!
//! Lines are never stored on the tree. Every consumer (the renderer, the
//! selection resolver, tests) re-derives them with the same pre-order walk:
//! each node takes the next line before its children are considered, and
//! children are visited only below an expanded directory.
//!
//! Visitors steer the walk with [`ControlFlow`]. A `Break` stops the walk at
//! once and is handed back to whoever started it, so a visitor that mutates
//! the tree never sees line numbers computed for the old shape.

use std::ops::ControlFlow;

use crate::model::node::Node;

/// Position of a node in the flattened view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePos {
    pub line: usize,
    pub depth: usize,
}

/// Walks `root` read-only. Returns the number of lines consumed before the
/// walk ended, and how it ended.
pub fn walk<'a, B, F>(root: &'a Node, mut visit: F) -> (usize, ControlFlow<B>)
where
    F: FnMut(&'a Node, LinePos) -> ControlFlow<B>,
{
    let mut line = 0;
    let flow = walk_node(root, 0, &mut line, &mut visit);
    (line, flow)
}

fn walk_node<'a, B, F>(
    node: &'a Node,
    depth: usize,
    line: &mut usize,
    visit: &mut F,
) -> ControlFlow<B>
where
    F: FnMut(&'a Node, LinePos) -> ControlFlow<B>,
{
    let pos = LinePos { line: *line, depth };
    *line += 1;
    visit(node, pos)?;

    if node.shows_children() {
        for child in node.children() {
            walk_node(child, depth + 1, line, visit)?;
        }
    }

    ControlFlow::Continue(())
}

/// Mutable twin of [`walk`]. Expansion is read after the visitor returns, so
/// a visitor that toggles a node and continues would walk the new shape;
/// callers that mutate are expected to `Break` instead.
pub fn walk_mut<B, F>(root: &mut Node, mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&mut Node, LinePos) -> ControlFlow<B>,
{
    let mut line = 0;
    walk_node_mut(root, 0, &mut line, &mut visit)
}

fn walk_node_mut<B, F>(
    node: &mut Node,
    depth: usize,
    line: &mut usize,
    visit: &mut F,
) -> ControlFlow<B>
where
    F: FnMut(&mut Node, LinePos) -> ControlFlow<B>,
{
    let pos = LinePos { line: *line, depth };
    *line += 1;
    visit(&mut *node, pos)?;

    if node.shows_children() {
        for child in node.children_mut() {
            walk_node_mut(child, depth + 1, line, visit)?;
        }
    }

    ControlFlow::Continue(())
}

/// Number of lines the tree occupies under its current expansion state.
pub fn visible_line_count(root: &Node) -> usize {
    walk(root, |_, _| ControlFlow::<()>::Continue(())).0
}

/// The node drawn at `line`, if any.
pub fn node_at(root: &Node, line: usize) -> Option<(&Node, LinePos)> {
    match walk(root, |node, pos| {
        if pos.line == line {
            ControlFlow::Break((node, pos))
        } else {
            ControlFlow::Continue(())
        }
    }) {
        (_, ControlFlow::Break(found)) => Some(found),
        (_, ControlFlow::Continue(())) => None,
    }
}

/// Every visible node with its position, in line order.
pub fn visible_nodes(root: &Node) -> Vec<(&Node, LinePos)> {
    let mut out = Vec::new();
    let _ = walk(root, |node, pos| {
        out.push((node, pos));
        ControlFlow::<()>::Continue(())
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::directory(
            "root",
            "root",
            vec![
                Node::directory(
                    "dirA",
                    "root/dirA",
                    vec![
                        Node::file("a1", "root/dirA/a1"),
                        Node::directory(
                            "deep",
                            "root/dirA/deep",
                            vec![Node::file("d1", "root/dirA/deep/d1")],
                        ),
                    ],
                ),
                Node::file("file1", "root/file1"),
            ],
        )
        .with_expanded(true)
    }

    fn names(root: &Node) -> Vec<(&str, usize)> {
        visible_nodes(root)
            .into_iter()
            .map(|(n, pos)| (n.name(), pos.depth))
            .collect()
    }

    #[test]
    fn collapsed_root_is_one_line() {
        let root = sample().with_expanded(false);
        assert_eq!(visible_line_count(&root), 1);
    }

    #[test]
    fn preorder_with_depths() {
        let mut root = sample();
        assert_eq!(names(&root), vec![("root", 0), ("dirA", 1), ("file1", 1)]);

        root.children_mut()[0].toggle_expanded();
        assert_eq!(
            names(&root),
            vec![
                ("root", 0),
                ("dirA", 1),
                ("a1", 2),
                ("deep", 2),
                ("file1", 1)
            ]
        );
    }

    #[test]
    fn lines_are_dense_and_repeatable() {
        let mut root = sample();
        root.children_mut()[0].toggle_expanded();

        let first: Vec<usize> = visible_nodes(&root).iter().map(|(_, p)| p.line).collect();
        let second: Vec<usize> = visible_nodes(&root).iter().map(|(_, p)| p.line).collect();
        assert_eq!(first, (0..first.len()).collect::<Vec<_>>());
        assert_eq!(first, second);
        assert_eq!(visible_line_count(&root), first.len());
    }

    #[test]
    fn node_at_past_the_end_is_none() {
        let root = sample();
        assert_eq!(node_at(&root, 2).map(|(n, _)| n.name()), Some("file1"));
        assert!(node_at(&root, 3).is_none());
    }

    #[test]
    fn break_stops_before_children() {
        let mut root = sample();
        root.children_mut()[0].toggle_expanded();

        let mut seen = Vec::new();
        let (consumed, flow) = walk(&root, |node, _| {
            seen.push(node.name().to_string());
            if node.name() == "dirA" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(consumed, 2);
        assert_eq!(seen, vec!["root", "dirA"]);
    }
}
