//! src/model/app_state.rs
//! ============================================================================
//! # `AppState`: everything the event loop mutates
//!
//! The tree and the viewport live together so one `&mut AppState` is all the
//! renderer and the dispatcher ever need. Nothing here is shared across
//! threads.

use crate::model::{node::Node, viewport::Viewport};

#[derive(Debug, Clone)]
pub struct AppState {
    /// The browsed tree, built once at startup.
    pub root: Node,

    /// Cursor and scroll position.
    pub viewport: Viewport,
}

impl AppState {
    #[must_use]
    pub fn new(root: Node, height: usize) -> Self {
        Self {
            root,
            viewport: Viewport::new(height),
        }
    }
}
