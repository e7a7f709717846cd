//! Abstract input key event, independent of terminal library.
//!
//! The update function only ever sees `InputKey`, so the state machine can be
//! driven from tests or the headless runner without pulling in crossterm.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (digits, letters, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+r, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    /// Enter/Return: the confirm key
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// The key that advances focus through the estimator form
    pub fn is_confirm(&self) -> bool {
        matches!(self, InputKey::Enter)
    }
}
