//! Keyboard input understood by the board

/// A key press, reduced to what the board routes on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single ASCII letter, always stored lowercase
    Letter(char),
    Backspace,
    Enter,
    /// Anything else; ignored by the board
    Other,
}

impl Key {
    /// Classify a typed character
    ///
    /// ```
    /// use wordle_tree::core::Key;
    ///
    /// assert_eq!(Key::from_char('Q'), Key::Letter('q'));
    /// assert_eq!(Key::from_char('7'), Key::Other);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::Letter(c.to_ascii_lowercase())
        } else {
            Self::Other
        }
    }

    /// Classify a key by its browser-style name ("Enter", "Backspace", "a")
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        match lowered.as_str() {
            "enter" => Self::Enter,
            "backspace" => Self::Backspace,
            _ => {
                let mut chars = lowered.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys() {
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("ENTER"), Key::Enter);
        assert_eq!(Key::from_name("Backspace"), Key::Backspace);
    }

    #[test]
    fn letters_are_lowercased() {
        assert_eq!(Key::from_name("A"), Key::Letter('a'));
        assert_eq!(Key::from_name("z"), Key::Letter('z'));
    }

    #[test]
    fn everything_else_is_other() {
        for name in ["Shift", "ArrowLeft", "1", " ", "", "é", "ab"] {
            assert_eq!(Key::from_name(name), Key::Other, "key {name:?}");
        }
    }
}
