//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Tracks which modifier keys are currently pressed so keybindings such as
/// `Ctrl+Z` can be matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when Ctrl or Alt is held (a "command" chord rather than typing).
    pub fn is_command(&self) -> bool {
        self.ctrl || self.alt
    }

    /// Releases every modifier.
    ///
    /// Used when focus leaves the surface, or after an action that may swallow
    /// the matching key release events.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
