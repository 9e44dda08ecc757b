//! Logical keys understood by the session.
//!
//! Platform key codes never reach the engine. A display layer maps its own
//! events onto this set.

/// One key press after translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    /// A typed character: digit, letter, space, hyphen, underscore or period.
    Char(u8),
    /// Home. Recognized, currently does nothing.
    CursorLeft,
    /// End. Recognized, currently does nothing.
    CursorRight,
    /// Advance to the next completion candidate.
    Cycle,
    DeleteBackward,
    /// Delete. Recognized, currently does nothing.
    DeleteForward,
    /// Launch what has been typed.
    Commit,
    /// Close the bar without launching.
    Cancel,
}

impl LogicalKey {
    /// Whether `ch` belongs to the typeable character set.
    pub fn is_input_char(ch: u8) -> bool {
        ch.is_ascii_alphanumeric() || matches!(ch, b' ' | b'-' | b'_' | b'.')
    }

    /// Builds a `Char` key, or `None` for characters outside the set.
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch)
            .ok()
            .filter(|b| Self::is_input_char(*b))
            .map(Self::Char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_chars() {
        for ch in ['a', 'Z', '7', ' ', '-', '_', '.'] {
            assert_eq!(LogicalKey::from_char(ch), Some(LogicalKey::Char(ch as u8)));
        }
    }

    #[test]
    fn test_rejected_chars() {
        for ch in ['/', '~', '\t', 'é', '€'] {
            assert_eq!(LogicalKey::from_char(ch), None);
        }
    }
}
