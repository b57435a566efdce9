use mandelview_engine::coords::Vec2;
use mandelview_engine::input::{InputState, Key};

use crate::config::ViewerConfig;
use crate::view::View;

/// Which key drives which view change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub pan_up: Key,
    pub pan_down: Key,
    pub pan_left: Key,
    pub pan_right: Key,
    pub zoom_in: Key,
    pub zoom_out: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pan_up: Key::W,
            pan_down: Key::S,
            pan_left: Key::A,
            pan_right: Key::D,
            zoom_in: Key::Q,
            zoom_out: Key::E,
        }
    }
}

impl KeyBindings {
    /// Applies every held key to `view` once. Returns whether any bound key was held.
    ///
    /// The pan step is taken from the zoom before this update, so a frame that
    /// both pans and zooms pans at the old scale.
    pub fn apply(&self, view: &mut View, input: &InputState, config: &ViewerConfig) -> bool {
        let step = view.pan_step(config.pan_factor);
        let mut held = false;

        for (key, delta) in [
            (self.pan_up, Vec2::new(0.0, step)),
            (self.pan_down, Vec2::new(0.0, -step)),
            (self.pan_left, Vec2::new(-step, 0.0)),
            (self.pan_right, Vec2::new(step, 0.0)),
        ] {
            if input.key_down(key) {
                view.pan(delta);
                held = true;
            }
        }

        if input.key_down(self.zoom_in) {
            view.zoom_in(config.zoom_step);
            held = true;
        }
        if input.key_down(self.zoom_out) {
            view.zoom_out(config.zoom_step);
            held = true;
        }

        held
    }
}
