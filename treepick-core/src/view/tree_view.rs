//! src/view/tree_view.rs
//! ============================================================================
//! # `TreeView`: line-addressed tree widget
//!
//! Walks the whole tree on every draw. Lines inside the viewport are painted
//! at `line - top_line`; lines outside are only counted. The final count is
//! written back to the [`Viewport`] so the next downward move can be bounded.

use std::ops::ControlFlow;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::StatefulWidget};

use crate::{
    model::{node::Node, viewport::Viewport},
    tree::walk::walk,
    view::theme::TreeStyles,
};

pub struct TreeView<'a> {
    root: &'a Node,
    indent_width: u16,
    styles: TreeStyles,
}

impl<'a> TreeView<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self {
            root,
            indent_width: 2,
            styles: TreeStyles::default(),
        }
    }

    #[must_use]
    pub const fn indent_width(mut self, width: u16) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub const fn styles(mut self, styles: TreeStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl StatefulWidget for TreeView<'_> {
    type State = Viewport;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Viewport) {
        buf.set_style(area, self.styles.base);

        let viewport = *state;
        let rows = usize::from(area.height).min(viewport.height);

        let (count, _) = walk(self.root, |node, pos| {
            let Some(row) = viewport.row_of(pos.line).filter(|row| *row < rows) else {
                return ControlFlow::<()>::Continue(());
            };

            let indent = pos.depth.saturating_mul(usize::from(self.indent_width));
            if indent >= usize::from(area.width) {
                return ControlFlow::Continue(());
            }

            let style = if pos.line == viewport.selected_line {
                self.styles.selected
            } else {
                Style::default()
            };

            // both fit in u16: row < area.height and indent < area.width
            buf.set_stringn(
                area.x + indent as u16,
                area.y + row as u16,
                node.name(),
                usize::from(area.width) - indent,
                style,
            );

            ControlFlow::Continue(())
        });

        state.set_visible_lines(count);
    }
}
