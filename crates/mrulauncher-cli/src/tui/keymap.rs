//! Terminal key events to logical keys.
//!
//! Mirrors the launcher's fixed key table: digits, letters, space, hyphen and
//! period type characters (shift gives upper case and underscore), Tab
//! cycles, Backspace deletes, Enter commits, Esc cancels. Everything else is
//! ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use mru_engine::LogicalKey;

/// Translates a terminal key event, or `None` if the bar ignores it.
pub fn translate(key: KeyEvent) -> Option<LogicalKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(LogicalKey::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(ch) => translate_char(ch, shift),
        KeyCode::Home => Some(LogicalKey::CursorLeft),
        KeyCode::End => Some(LogicalKey::CursorRight),
        KeyCode::Tab => Some(LogicalKey::Cycle),
        KeyCode::Backspace => Some(LogicalKey::DeleteBackward),
        KeyCode::Delete => Some(LogicalKey::DeleteForward),
        KeyCode::Enter => Some(LogicalKey::Commit),
        KeyCode::Esc => Some(LogicalKey::Cancel),
        _ => None,
    }
}

fn translate_char(ch: char, shift: bool) -> Option<LogicalKey> {
    // Some terminals report shifted letters as lower case plus SHIFT.
    let ch = match ch {
        'a'..='z' if shift => ch.to_ascii_uppercase(),
        '-' if shift => '_',
        _ => ch,
    };
    LogicalKey::from_char(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shifted(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    #[test]
    fn test_typed_characters() {
        assert_eq!(translate(press(KeyCode::Char('v'))), Some(LogicalKey::Char(b'v')));
        assert_eq!(translate(press(KeyCode::Char('7'))), Some(LogicalKey::Char(b'7')));
        assert_eq!(translate(press(KeyCode::Char(' '))), Some(LogicalKey::Char(b' ')));
        assert_eq!(translate(press(KeyCode::Char('.'))), Some(LogicalKey::Char(b'.')));
        assert_eq!(translate(press(KeyCode::Char('-'))), Some(LogicalKey::Char(b'-')));
    }

    #[test]
    fn test_shift_variants() {
        assert_eq!(translate(shifted(KeyCode::Char('v'))), Some(LogicalKey::Char(b'V')));
        assert_eq!(translate(shifted(KeyCode::Char('V'))), Some(LogicalKey::Char(b'V')));
        assert_eq!(translate(shifted(KeyCode::Char('-'))), Some(LogicalKey::Char(b'_')));
        assert_eq!(translate(shifted(KeyCode::Char('_'))), Some(LogicalKey::Char(b'_')));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(translate(press(KeyCode::Tab)), Some(LogicalKey::Cycle));
        assert_eq!(translate(press(KeyCode::Backspace)), Some(LogicalKey::DeleteBackward));
        assert_eq!(translate(press(KeyCode::Delete)), Some(LogicalKey::DeleteForward));
        assert_eq!(translate(press(KeyCode::Home)), Some(LogicalKey::CursorLeft));
        assert_eq!(translate(press(KeyCode::End)), Some(LogicalKey::CursorRight));
        assert_eq!(translate(press(KeyCode::Enter)), Some(LogicalKey::Commit));
        assert_eq!(translate(press(KeyCode::Esc)), Some(LogicalKey::Cancel));
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(key), Some(LogicalKey::Cancel));
        let key = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL);
        assert_eq!(translate(key), None);
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(translate(press(KeyCode::Char('/'))), None);
        assert_eq!(translate(press(KeyCode::Char('é'))), None);
        assert_eq!(translate(press(KeyCode::Up)), None);
        assert_eq!(translate(press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(key), None);
    }
}
