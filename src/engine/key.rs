//! Input keys understood by the engine

/// A supported key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An ASCII letter, always stored upper-case
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Parse a key name as delivered by a keyboard event
    ///
    /// Accepts `"Backspace"`, `"Enter"` and any single ASCII letter in
    /// either case. Everything else is unsupported.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::engine::Key;
    ///
    /// assert_eq!(Key::from_name("a"), Some(Key::Letter('A')));
    /// assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::from_name("Shift"), None);
    /// assert_eq!(Key::from_name("1"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Backspace" => Some(Self::Backspace),
            "Enter" => Some(Self::Enter),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Letter key for `c`, if it is an ASCII letter
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_uppercase()))
        } else {
            None
        }
    }
}
