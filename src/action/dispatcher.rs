use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::config::{parse_key, parse_modifiers, Config, KeyBinding};

use super::Action;

/// Dispatches key events to actions based on configuration
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    /// Create a new dispatcher from configuration
    pub fn new(config: &Config) -> Self {
        let bindings = config
            .bindings
            .iter()
            .filter(|binding| match parse_key(&binding.key) {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(%err, "skipping key binding");
                    false
                }
            })
            .cloned()
            .collect();

        Self { bindings }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        // First, check configured bindings
        for binding in &self.bindings {
            if self.matches(binding, &key, mode) {
                return binding.action.as_deref().and_then(Action::from_str);
            }
        }

        // The hex editor takes raw characters
        if *mode == Mode::Insert {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                if let KeyCode::Char(c) = key.code {
                    return Some(Action::InsertChar(c));
                }
            }
            if key.code == KeyCode::Backspace {
                return Some(Action::DeleteChar);
            }
        }

        None
    }

    /// Check if a binding matches the key event and mode
    fn matches(&self, binding: &KeyBinding, key: &KeyEvent, mode: &Mode) -> bool {
        let Ok(binding_key) = parse_key(&binding.key) else {
            return false;
        };

        if binding_key != key.code {
            return false;
        }

        if parse_modifiers(binding.mods.as_deref()) != key.modifiers {
            return false;
        }

        if let Some(mode_str) = &binding.mode {
            if !self.mode_matches(mode_str, mode) {
                return false;
            }
        }

        true
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: &Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_name_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m.trim(), current_mode));
        }

        self.mode_name_matches(mode_str, current_mode)
    }

    fn mode_name_matches(&self, name: &str, current_mode: &Mode) -> bool {
        match name.trim().to_lowercase().as_str() {
            "normal" => matches!(current_mode, Mode::Normal),
            "insert" => matches!(current_mode, Mode::Insert),
            "grab" => matches!(current_mode, Mode::Grab),
            "dialog" => matches!(current_mode, Mode::Dialog),
            _ => false,
        }
    }
}
