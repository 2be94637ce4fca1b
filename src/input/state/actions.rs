use crate::config::Action;
use crate::input::{events::Key, tool::PenPreset};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the modifier state. While the custom stamp prompt
    /// is open, keys edit its buffer (Return confirms, Escape cancels) and only
    /// Ctrl/Alt chords reach the keybindings. Otherwise the key is looked up
    /// in the configured keybindings.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        if matches!(self.state, DrawingState::StampEntry { .. }) {
            self.on_prompt_key(key);
            return;
        }

        if let Some(action) = key
            .binding_name()
            .and_then(|name| self.find_action(&name))
        {
            self.handle_action(action);
        }
    }

    fn on_prompt_key(&mut self, key: Key) {
        if self.modifiers.is_command() {
            if let Some(action) = key
                .binding_name()
                .and_then(|name| self.find_action(&name))
            {
                self.handle_action(action);
            }
            return;
        }

        match key {
            Key::Return => self.confirm_stamp_prompt(),
            Key::Escape => self.cancel_stamp_prompt(),
            _ => {
                if let DrawingState::StampEntry { buffer } = &mut self.state {
                    match key {
                        Key::Char(c) => buffer.push(c),
                        Key::Space => buffer.push(' '),
                        Key::Backspace => {
                            buffer.pop();
                        }
                        _ => return,
                    }
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// Opens the custom stamp prompt pre-filled with the configured default.
    pub fn open_stamp_prompt(&mut self) {
        if !matches!(self.state, DrawingState::Idle) {
            return;
        }
        self.state = DrawingState::StampEntry {
            buffer: self.settings.custom_stamp_default.clone(),
        };
        self.preview = None;
        self.needs_redraw = true;
    }

    /// Closes the prompt and adds its text to the palette.
    pub fn confirm_stamp_prompt(&mut self) {
        if let DrawingState::StampEntry { buffer } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        {
            self.add_custom_stamp(&buffer);
            self.needs_redraw = true;
        }
    }

    /// Closes the prompt without changing the palette.
    pub fn cancel_stamp_prompt(&mut self) {
        if matches!(self.state, DrawingState::StampEntry { .. }) {
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }

    /// Handle an action triggered by a keybinding or a toolbar button.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => match self.state {
                DrawingState::StampEntry { .. } => self.cancel_stamp_prompt(),
                DrawingState::Drawing { .. } => {
                    self.state = DrawingState::Idle;
                    self.needs_redraw = true;
                }
                DrawingState::Idle => {
                    if self.show_help {
                        self.show_help = false;
                        self.needs_redraw = true;
                    } else if !self.cancel_stamp() {
                        self.should_exit = true;
                    }
                }
            },
            Action::SelectThinPen => self.select_pen(PenPreset::Thin),
            Action::SelectThickPen => self.select_pen(PenPreset::Thick),
            Action::SelectStamp(index) => self.select_stamp(index),
            Action::NextStamp => self.select_next_stamp(),
            Action::CreateStamp => self.open_stamp_prompt(),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::ClearCanvas => self.clear(),
            Action::Export => {
                log::debug!("Export pending for backend");
                self.request_export();
                // The save can stall the loop long enough to miss key releases
                self.modifiers.reset();
            }
            Action::IncreaseThickness => self.adjust_thickness(1.0),
            Action::DecreaseThickness => self.adjust_thickness(-1.0),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases matter.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
