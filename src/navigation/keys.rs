//! Key decoding for navigation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys the traversers react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    /// Enter or Space
    Activate,
}

impl NavKey {
    /// Whether `event` carries Alt, Ctrl, Meta or Super and belongs to the host
    pub fn is_passthrough(event: &KeyEvent) -> bool {
        let passthrough =
            KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::META | KeyModifiers::SUPER;
        event.modifiers.intersects(passthrough)
    }

    /// Decode a key event.
    ///
    /// Anything combined with Alt, Ctrl, Meta or Super is left to the host.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if Self::is_passthrough(event) {
            return None;
        }

        match event.code {
            KeyCode::Up => Some(NavKey::Up),
            KeyCode::Down => Some(NavKey::Down),
            KeyCode::Left => Some(NavKey::Left),
            KeyCode::Right => Some(NavKey::Right),
            KeyCode::Enter | KeyCode::Char(' ') => Some(NavKey::Activate),
            _ => None,
        }
    }
}
