use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Held keys for a single window.
///
/// This is the polled keyboard state the frame loop reads once per redraw,
/// however many events arrived since the last one.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies one event to the held-key set.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            // Releases are not delivered to an unfocused window.
            InputEvent::Focused(false) => self.keys_down.clear(),
            InputEvent::Focused(true) => {}

            InputEvent::Key { key, state: KeyState::Pressed } => {
                self.keys_down.insert(key);
            }
            InputEvent::Key { key, state: KeyState::Released } => {
                self.keys_down.remove(&key);
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}
