//! Abstract input key event, independent of terminal library.
//!
//! Converted from crossterm's `KeyEvent` at the TUI boundary, so this crate
//! never depends on terminal-specific types. Only the keys the app actually
//! consumes are represented.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+d, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_keys_carry_their_char() {
        assert_eq!(InputKey::Char('x'), InputKey::Char('x'));
        assert_ne!(InputKey::Char('x'), InputKey::CharCtrl('x'));
    }

    #[test]
    fn test_keys_are_copy() {
        let key = InputKey::Enter;
        let copied = key;
        assert_eq!(key, copied);
    }
}
