//! Input binding layer
//!
//! Raw key and mouse-button state comes in from the windowing layer;
//! this module turns it into named gameplay actions through a binding
//! table. Action events are queued and drained by the game loop, and
//! key repeats while a key is held do not re-trigger actions.

pub mod picking;

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::core::config::InputConfig;

/// Key codes reported by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Q key
    Q,
    /// E key
    E,
    /// F key
    F,
    /// R key
    R,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Left shift key
    Shift,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Parse a key name as it appears in config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "w" => Some(Self::W),
            "a" => Some(Self::A),
            "s" => Some(Self::S),
            "d" => Some(Self::D),
            "q" => Some(Self::Q),
            "e" => Some(Self::E),
            "f" => Some(Self::F),
            "r" => Some(Self::R),
            "space" => Some(Self::Space),
            "enter" => Some(Self::Enter),
            "escape" => Some(Self::Escape),
            "shift" => Some(Self::Shift),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// A named action transition produced by the binding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
    /// The bound action name
    pub action: String,
    /// `true` on press, `false` on release
    pub pressed: bool,
}

/// Maps raw input to named actions
#[derive(Debug, Default)]
pub struct InputManager {
    key_bindings: HashMap<KeyCode, String>,
    mouse_bindings: HashMap<MouseButton, String>,
    held_keys: HashSet<KeyCode>,
    pending: Vec<ActionEvent>,
}

impl InputManager {
    /// Create an input manager with no bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action name
    pub fn bind_key(&mut self, key: KeyCode, action: impl Into<String>) {
        self.key_bindings.insert(key, action.into());
    }

    /// Bind a mouse button to an action name
    pub fn bind_mouse_button(&mut self, button: MouseButton, action: impl Into<String>) {
        self.mouse_bindings.insert(button, action.into());
    }

    /// Load key bindings from config
    ///
    /// Unknown key names are logged and skipped rather than failing the
    /// whole config.
    pub fn apply_config(&mut self, config: &InputConfig) {
        for (key_name, action) in &config.bindings {
            match KeyCode::from_name(key_name) {
                Some(key) => self.bind_key(key, action.clone()),
                None => warn!("ignoring binding for unknown key {key_name:?}"),
            }
        }
    }

    /// Feed a key transition from the windowing layer
    ///
    /// Repeated press reports while the key is held are ignored.
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if !self.held_keys.insert(key) {
                return; // Key repeat
            }
        } else if !self.held_keys.remove(&key) {
            return; // Release without a matching press
        }

        if let Some(action) = self.key_bindings.get(&key) {
            self.pending.push(ActionEvent {
                action: action.clone(),
                pressed,
            });
        }
    }

    /// Feed a mouse-button transition from the windowing layer
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if let Some(action) = self.mouse_bindings.get(&button) {
            self.pending.push(ActionEvent {
                action: action.clone(),
                pressed,
            });
        }
    }

    /// Whether a key is currently held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }

    /// Remove and return all queued action events
    pub fn drain_actions(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.pending)
    }
}
