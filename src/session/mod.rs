//! Search session module
//!
//! This module owns the live query, the derived result list and the
//! keyboard-driven selection cursor of the search overlay.

mod cursor;
mod hotkey;
mod state;

pub use cursor::SelectionCursor;
pub use hotkey::{Hotkey, HotkeyParseError, Key, KeyEvent, Modifiers};
pub use state::{Navigator, SearchSession, SessionState};
