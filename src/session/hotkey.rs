//! Keyboard events and the injected open shortcut
//!
//! The session never listens to a UI runtime directly. Callers translate
//! their native key events into [`KeyEvent`] and hand the session a
//! [`Hotkey`] describing which event opens it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Logical key of a keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Modifier keys held during an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Key press without modifiers
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Character key press without modifiers
    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// Errors from parsing a hotkey description such as `mod+k`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyParseError {
    #[error("hotkey is empty")]
    Empty,

    #[error("unknown modifier '{0}' (expected mod, ctrl, meta, cmd, alt or shift)")]
    UnknownModifier(String),

    #[error("hotkey key must be a single character, got '{0}'")]
    InvalidKey(String),
}

/// Shortcut that opens the search session
///
/// `mod` means "Ctrl or Meta", matching both the `⌘K` and `Ctrl+K` habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    key: char,
    primary: bool,
    ctrl: bool,
    meta: bool,
    alt: bool,
    shift: bool,
}

impl Default for Hotkey {
    fn default() -> Self {
        Self {
            key: 'k',
            primary: true,
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
        }
    }
}

impl Hotkey {
    /// Check whether `event` triggers this shortcut
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let Key::Char(c) = event.key else {
            return false;
        };
        let m = event.modifiers;

        c.to_lowercase().eq(self.key.to_lowercase())
            && (!self.primary || m.ctrl || m.meta)
            && (!self.ctrl || m.ctrl)
            && (!self.meta || m.meta)
            && (!self.alt || m.alt)
            && (!self.shift || m.shift)
    }
}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HotkeyParseError::Empty);
        }

        // The key itself may be '+', so split off the last segment by hand
        let (mods, key) = match s.rfind('+') {
            Some(pos) if pos + 1 < s.len() => (&s[..pos], &s[pos + 1..]),
            Some(pos) if pos > 0 => (s[..pos].trim_end_matches('+'), "+"),
            _ => ("", s),
        };

        let mut chars = key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(HotkeyParseError::InvalidKey(key.to_string())),
        };

        let mut hotkey = Self {
            key,
            primary: false,
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
        };

        for modifier in mods.split('+').filter(|m| !m.is_empty()) {
            match modifier.trim().to_lowercase().as_str() {
                "mod" => hotkey.primary = true,
                "ctrl" | "control" => hotkey.ctrl = true,
                "meta" | "cmd" | "super" => hotkey.meta = true,
                "alt" | "option" => hotkey.alt = true,
                "shift" => hotkey.shift = true,
                _ => return Err(HotkeyParseError::UnknownModifier(modifier.to_string())),
            }
        }

        Ok(hotkey)
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.primary, "mod"),
            (self.ctrl, "ctrl"),
            (self.meta, "meta"),
            (self.alt, "alt"),
            (self.shift, "shift"),
        ];
        for (_, name) in flags.iter().filter(|(on, _)| *on) {
            write!(f, "{}+", name)?;
        }
        write!(f, "{}", self.key)
    }
}
