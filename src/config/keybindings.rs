//! Keybinding configuration types and parsing.
//!
//! Every keyboard shortcut in the sketchbook maps to an [`Action`]; toolbar
//! buttons dispatch the same actions so both paths share one code path.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the user can ask the sketchbook to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Exit,

    // Pen presets
    SelectThinPen,
    SelectThickPen,

    // Stamps
    /// Select the palette entry at this index (toolbar only)
    SelectStamp(usize),
    NextStamp,
    CreateStamp,

    // History
    Undo,
    Redo,
    ClearCanvas,

    Export,

    IncreaseThickness,
    DecreaseThickness,

    ToggleHelp,
}

/// A single keybinding: a key character with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty leftovers are the '+' key
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// export = ["Ctrl+S"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_select_thin_pen")]
    pub select_thin_pen: Vec<String>,

    #[serde(default = "default_select_thick_pen")]
    pub select_thick_pen: Vec<String>,

    #[serde(default = "default_next_stamp")]
    pub next_stamp: Vec<String>,

    #[serde(default = "default_create_stamp")]
    pub create_stamp: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_export")]
    pub export: Vec<String>,

    #[serde(default = "default_increase_thickness")]
    pub increase_thickness: Vec<String>,

    #[serde(default = "default_decrease_thickness")]
    pub decrease_thickness: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            select_thin_pen: default_select_thin_pen(),
            select_thick_pen: default_select_thick_pen(),
            next_stamp: default_next_stamp(),
            create_stamp: default_create_stamp(),
            undo: default_undo(),
            redo: default_redo(),
            clear_canvas: default_clear_canvas(),
            export: default_export(),
            increase_thickness: default_increase_thickness(),
            decrease_thickness: default_decrease_thickness(),
            toggle_help: default_toggle_help(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or bound twice.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let groups: [(&[String], Action); 12] = [
            (&self.exit, Action::Exit),
            (&self.select_thin_pen, Action::SelectThinPen),
            (&self.select_thick_pen, Action::SelectThickPen),
            (&self.next_stamp, Action::NextStamp),
            (&self.create_stamp, Action::CreateStamp),
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.export, Action::Export),
            (&self.increase_thickness, Action::IncreaseThickness),
            (&self.decrease_thickness, Action::DecreaseThickness),
            (&self.toggle_help, Action::ToggleHelp),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_select_thin_pen() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_select_thick_pen() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_next_stamp() -> Vec<String> {
    vec!["S".to_string()]
}

fn default_create_stamp() -> Vec<String> {
    vec!["C".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_export() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}

fn default_increase_thickness() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_thickness() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F10".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_shift_key() {
        let binding = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let a = KeyBinding::parse("Ctrl + Shift + Z").unwrap();
        let b = KeyBinding::parse("Shift+Ctrl+Z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("+").unwrap();
        assert_eq!(binding.key, "+");
        assert!(!binding.ctrl);

        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+S").unwrap();
        assert!(binding.matches("s", true, false, false));
        assert!(!binding.matches("s", false, false, false));
        assert!(!binding.matches("s", true, true, false));
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();

        let lookup = |s: &str| map.get(&KeyBinding::parse(s).unwrap()).copied();
        assert_eq!(lookup("Escape"), Some(Action::Exit));
        assert_eq!(lookup("Ctrl+Z"), Some(Action::Undo));
        assert_eq!(lookup("Ctrl+Y"), Some(Action::Redo));
        assert_eq!(lookup("Ctrl+Shift+Z"), Some(Action::Redo));
        assert_eq!(lookup("Ctrl+S"), Some(Action::Export));
        assert_eq!(lookup("1"), Some(Action::SelectThinPen));
        assert_eq!(lookup("2"), Some(Action::SelectThickPen));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.export = vec!["Ctrl+Z".to_string()];

        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding"));
        assert!(err.contains("Ctrl+Z"));
    }

    #[test]
    fn test_duplicate_with_different_modifier_order() {
        let mut config = KeybindingsConfig::default();
        config.exit = vec!["Shift+Ctrl+Z".to_string()];

        assert!(config.build_action_map().is_err());
    }
}
