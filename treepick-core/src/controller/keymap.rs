// treepick-core/src/controller/keymap.rs
// Key bindings: arrows + Enter everywhere, vim letters on request

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::{config::Keymap, controller::actions::Action};

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(Keymap::Standard)
    }
}

impl KeyBindings {
    pub fn new(keymap: Keymap) -> Self {
        let mut bindings = HashMap::with_capacity(12);

        // Arrow keys
        bindings.insert(plain(KeyCode::Up), Action::MoveSelectionUp);
        bindings.insert(plain(KeyCode::Down), Action::MoveSelectionDown);

        // Page navigation
        bindings.insert(plain(KeyCode::PageUp), Action::PageUp);
        bindings.insert(plain(KeyCode::PageDown), Action::PageDown);

        // Entry actions
        bindings.insert(plain(KeyCode::Enter), Action::Activate);

        // Quit
        bindings.insert(key('q'), Action::Quit);
        bindings.insert(ctrl('c'), Action::Quit);

        if keymap == Keymap::Vim {
            bindings.insert(key('k'), Action::MoveSelectionUp);
            bindings.insert(key('j'), Action::MoveSelectionDown);
            bindings.insert(key('l'), Action::Activate);
            bindings.insert(ctrl('b'), Action::PageUp);
            bindings.insert(ctrl('f'), Action::PageDown);
        }

        Self { bindings }
    }

    /// Translate a terminal event. Key releases and unbound keys map to `None`.
    pub fn action_for(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                trace!("key {:?}", key_event);
                // lookup ignores kind/state so repeats behave like presses
                let lookup = KeyEvent::new(key_event.code, key_event.modifiers);
                self.bindings.get(&lookup).copied()
            }
            Event::Resize(cols, rows) => Some(Action::Resize(*cols, *rows)),
            _ => None,
        }
    }
}

const fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn key(c: char) -> KeyEvent {
    plain(KeyCode::Char(c))
}

const fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
