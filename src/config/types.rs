// Menu button configuration types
// Every section falls back to defaults so partial files stay valid

use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::menu::{MenuItem, MenuMarkup};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuConfig {
    // Label shown on the menu button (empty = unlabeled trigger)
    pub trigger_label: String,

    // Actions in presentation order
    pub items: Vec<ItemConfig>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            trigger_label: "Actions".to_string(),
            items: (1..=4)
                .map(|n| ItemConfig {
                    label: format!("Action {}", n),
                    payload: None,
                })
                .collect(),
        }
    }
}

impl MenuConfig {
    /// Build the markup a menu button binds to
    pub fn to_markup(&self) -> MenuMarkup {
        let trigger_label = if self.trigger_label.trim().is_empty() {
            None
        } else {
            Some(self.trigger_label.clone())
        };

        let items = self
            .items
            .iter()
            .map(|item| match &item.payload {
                Some(payload) => MenuItem::new(item.label.as_str()).with_payload(payload.as_str()),
                None => MenuItem::new(item.label.as_str()),
            })
            .collect();

        MenuMarkup {
            trigger_label,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ItemConfig {
    pub label: String,

    // Text reported when chosen; defaults to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyBindings {
    // Leaves the application (only when the menu button does not consume the key)
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "Q".to_string(),
        }
    }
}

impl KeyBindings {
    /// Key code for the quit binding, falling back to 'q' when unparsable
    pub fn quit_key(&self) -> KeyCode {
        parse_key(&self.quit).unwrap_or_else(|| {
            warn!(binding = %self.quit, "unrecognised quit key, using Q");
            KeyCode::Char('q')
        })
    }
}

/// Parse a key name: "Up", "Down", "Left", "Right", "Enter", "Esc", "Tab"
/// or a single character. Characters are matched lowercase.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    match name.to_ascii_lowercase().as_str() {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "enter" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Trigger border and text color (RGB values 0-255)
    pub trigger_color: [u8; 3],

    // Focused trigger/item highlight color
    pub focus_color: [u8; 3],

    // Popup border color
    pub menu_border_color: [u8; 3],

    // Action output field color
    pub output_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            trigger_color: [255, 255, 255],     // White
            focus_color: [255, 255, 0],         // Yellow
            menu_border_color: [0, 255, 255],   // Cyan
            output_color: [100, 100, 100],      // Gray
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorConfig {
    // Copy the chosen action's text to the system clipboard
    pub copy_to_clipboard: bool,
}
