//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: action dispatch
//!
//! Applies one [`Action`] to the [`AppState`] and says whether the session
//! goes on. The terminal plumbing lives in `main.rs`; everything here is
//! synchronous and runs between a key read and the next redraw.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    controller::actions::Action,
    model::app_state::AppState,
    tree::resolve::{Resolution, resolve},
};

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A file was activated; its path goes to stdout.
    Selected(PathBuf),

    /// The user quit without choosing.
    Cancelled,
}

/// Whether the loop keeps reading keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(Outcome),
}

pub struct EventLoop {
    state: AppState,
    actions: u64,
}

impl EventLoop {
    pub const fn new(state: AppState) -> Self {
        Self { state, actions: 0 }
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Number of actions dispatched so far.
    pub const fn actions(&self) -> u64 {
        self.actions
    }

    pub fn dispatch_action(&mut self, action: Action) -> Flow {
        self.actions += 1;
        debug!("Dispatching action: {:?}", action);

        let viewport = &mut self.state.viewport;
        match action {
            Action::MoveSelectionUp => viewport.move_up(),
            Action::MoveSelectionDown => viewport.move_down(),
            Action::PageUp => viewport.page_up(),
            Action::PageDown => viewport.page_down(),
            Action::Resize(_, rows) => viewport.set_height(usize::from(rows)),
            Action::Quit => {
                info!("Quit requested");
                return Flow::Exit(Outcome::Cancelled);
            }
            Action::Activate => return self.activate(),
        }

        Flow::Continue
    }

    fn activate(&mut self) -> Flow {
        let line = self.state.viewport.selected_line;

        match resolve(&mut self.state.root, line) {
            Resolution::Toggled { path, expanded } => {
                debug!(line, expanded, "Toggled {}", path.display());
                Flow::Continue
            }
            Resolution::Activated(path) => {
                info!("Selected {}", path.display());
                Flow::Exit(Outcome::Selected(path))
            }
            Resolution::NotFound => {
                debug!(line, "No node on the selected line");
                Flow::Continue
            }
        }
    }
}

/// Emit a picked path followed by a newline, byte for byte. Names that are
/// not valid UTF-8 must still name the same file when read back.
pub fn write_selection<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    out.write_all(path.as_os_str().as_encoded_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::node::Node, tree::walk::visible_line_count};

    fn state() -> AppState {
        let root = Node::directory(
            "root",
            "root",
            vec![
                Node::directory(
                    "dirA",
                    "root/dirA",
                    vec![Node::file("a1", "root/dirA/a1"), Node::file("a2", "root/dirA/a2")],
                ),
                Node::file("file1", "root/file1"),
            ],
        )
        .with_expanded(true);
        AppState::new(root, 10)
    }

    /// Stand-in for a render: record the current line count.
    fn rendered(ev: &mut EventLoop) {
        let count = visible_line_count(&ev.state().root);
        ev.state_mut().viewport.set_visible_lines(count);
    }

    #[test]
    fn down_then_activate_expands_a_directory() {
        let mut ev = EventLoop::new(state());
        rendered(&mut ev);

        assert_eq!(ev.dispatch_action(Action::MoveSelectionDown), Flow::Continue);
        assert_eq!(ev.dispatch_action(Action::Activate), Flow::Continue);
        rendered(&mut ev);

        assert!(ev.state().root.children()[0].is_expanded());
        assert_eq!(ev.state().viewport.visible_lines, 5);
    }

    #[test]
    fn activating_a_file_exits_with_its_path() {
        let mut ev = EventLoop::new(state());
        rendered(&mut ev);

        ev.dispatch_action(Action::MoveSelectionDown);
        ev.dispatch_action(Action::MoveSelectionDown);
        assert_eq!(
            ev.dispatch_action(Action::Activate),
            Flow::Exit(Outcome::Selected(PathBuf::from("root/file1")))
        );
    }

    #[test]
    fn quit_is_cancelled_from_any_state() {
        let mut ev = EventLoop::new(state());
        assert_eq!(
            ev.dispatch_action(Action::Quit),
            Flow::Exit(Outcome::Cancelled)
        );

        rendered(&mut ev);
        ev.dispatch_action(Action::MoveSelectionDown);
        ev.dispatch_action(Action::Activate);
        assert_eq!(
            ev.dispatch_action(Action::Quit),
            Flow::Exit(Outcome::Cancelled)
        );
        assert_eq!(ev.actions(), 4);
    }

    #[test]
    fn stale_selection_is_harmless() {
        let mut ev = EventLoop::new(state());
        ev.state_mut().viewport.selected_line = 42;
        let before = ev.state().root.clone();

        assert_eq!(ev.dispatch_action(Action::Activate), Flow::Continue);
        assert_eq!(ev.state().root, before);
    }

    #[test]
    fn selection_is_written_with_a_newline() {
        let mut out = Vec::new();
        write_selection(&mut out, Path::new("root/file1")).unwrap();
        assert_eq!(out, b"root/file1\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_selection_keeps_its_bytes() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let path = Path::new("root").join(OsStr::from_bytes(b"caf\xe9.txt"));
        let mut out = Vec::new();
        write_selection(&mut out, &path).unwrap();
        assert_eq!(out, b"root/caf\xe9.txt\n");
    }

    #[test]
    fn resize_updates_the_viewport_height() {
        let mut ev = EventLoop::new(state());
        ev.dispatch_action(Action::Resize(80, 2));
        assert_eq!(ev.state().viewport.height, 2);
    }
}
