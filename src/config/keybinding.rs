use crossterm::event::{KeyCode, KeyModifiers};

use crate::error::{Error, Result};

/// Parse a key string into KeyCode
pub fn parse_key(key: &str) -> Result<KeyCode> {
    let key = key.trim();

    // Single character
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    // Named keys
    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Esc),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Char(' ')),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "delete" | "del" => Ok(KeyCode::Delete),
        named => named
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| Error::InvalidKeyBinding(format!("Unknown key: {}", key))),
    }
}

/// Parse modifier string into KeyModifiers
pub fn parse_modifiers(mods: Option<&str>) -> KeyModifiers {
    let Some(mods) = mods else {
        return KeyModifiers::NONE;
    };

    let mut result = KeyModifiers::NONE;

    for part in mods.split('|') {
        let part = part.trim().to_lowercase();
        match part.as_str() {
            "control" | "ctrl" => result |= KeyModifiers::CONTROL,
            "shift" => result |= KeyModifiers::SHIFT,
            "alt" | "option" => result |= KeyModifiers::ALT,
            "super" | "command" | "cmd" => result |= KeyModifiers::SUPER,
            _ => {}
        }
    }

    result
}
