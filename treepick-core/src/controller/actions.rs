//! src/controller/actions.rs
//! ============================================================================
//! # Actions: everything the user can ask for
//!
//! Raw terminal events are translated into an `Action` by the keymap before
//! they reach the event loop.

/// Represents a high-level action that the application can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move selection up one line.
    MoveSelectionUp,

    /// Move selection down one line.
    MoveSelectionDown,

    /// Move selection up by one screen.
    PageUp,

    /// Move selection down by one screen.
    PageDown,

    /// Toggle the selected directory or pick the selected file.
    Activate,

    /// The terminal was resized to (columns, rows).
    Resize(u16, u16),

    /// Leave without picking anything.
    Quit,
}
