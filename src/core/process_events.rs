//! Samples raylib input into an [`InputSnapshot`].
use raylib::prelude::*;
use tracing::debug;

use crate::core::player::InputSnapshot;

/// Cursor capture state. Left click grabs the mouse, right click releases it.
#[derive(Debug, Default)]
pub struct CursorCapture {
    captured: bool,
}

impl CursorCapture {
    fn sync(&mut self, window: &mut RaylibHandle) {
        if window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && !self.captured {
            window.disable_cursor();
            self.captured = true;
            debug!("cursor captured");
        }
        if window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_RIGHT) && self.captured {
            window.enable_cursor();
            self.captured = false;
            debug!("cursor released");
        }
    }
}

#[inline]
fn held(window: &RaylibHandle, a: KeyboardKey, b: KeyboardKey) -> bool {
    window.is_key_down(a) || window.is_key_down(b)
}

pub fn process_events(window: &mut RaylibHandle, cursor: &mut CursorCapture) -> InputSnapshot {
    cursor.sync(window);
    InputSnapshot {
        forward: held(window, KeyboardKey::KEY_UP, KeyboardKey::KEY_W),
        backward: held(window, KeyboardKey::KEY_DOWN, KeyboardKey::KEY_S),
        strafe_left: held(window, KeyboardKey::KEY_LEFT, KeyboardKey::KEY_A),
        strafe_right: held(window, KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_D),
        mouse_dx: window.get_mouse_delta().x,
    }
}
