//! lib.rs: treepick, pick a file from a collapsible terminal tree
//! -----------------------------------------------
//! The binary in `main.rs` owns the terminal; everything testable lives here.

pub mod error;

pub mod config;

pub mod cli;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::{EventLoop, Flow, Outcome, write_selection};

    pub mod keymap;
    pub use keymap::KeyBindings;
}

pub mod model {
    pub mod app_state;
    pub use app_state::AppState;

    pub mod node;
    pub use node::Node;

    pub mod viewport;
    pub use viewport::Viewport;
}

pub mod tree {
    pub mod resolve;
    pub use resolve::{Resolution, resolve};

    pub mod walk;
    pub use walk::{LinePos, node_at, visible_line_count, visible_nodes, walk, walk_mut};
}

pub mod view {
    pub mod theme;

    pub mod tree_view;
    pub use tree_view::TreeView;

    pub mod ui;
    pub use ui::UIRenderer;
}

pub mod fs {
    pub mod tree_builder;
    pub use tree_builder::{BuildOptions, DirLister, FsLister, ListedEntry, TreeBuilder};
}

pub mod logging;

pub mod terminal;
pub use logging::Logger;

pub use error::AppError;

pub use model::{app_state::AppState, node::Node};
