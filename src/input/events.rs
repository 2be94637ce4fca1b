//! Generic input event types shared between the backend and the input state.

/// Generic key representation.
///
/// The backend maps native keysyms and their UTF-8 text onto these values so
/// the input state machine stays independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character (letters, digits, symbols, emoji)
    Char(char),
    Escape,
    Return,
    Backspace,
    Space,
    Shift,
    Ctrl,
    Alt,
    /// F10 function key (toggle help)
    F10,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used when matching the key against configured keybindings.
    ///
    /// Modifier keys and unknown keys have no binding name.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::F10 => Some("F10".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (draw / place stamp)
    Left,
    /// Right mouse button (cancel stroke or stamp)
    Right,
    /// Middle mouse button (unused)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names() {
        assert_eq!(Key::Char('z').binding_name().as_deref(), Some("z"));
        assert_eq!(Key::F10.binding_name().as_deref(), Some("F10"));
        assert_eq!(Key::Ctrl.binding_name(), None);
    }
}
