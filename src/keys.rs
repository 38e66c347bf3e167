/// A single key as reported by the host's keydown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Tab,
    Enter,
    /// Any other named key ("Escape", "F5", ...).
    Named(String),
}

impl Key {
    /// Maps a DOM-style `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Named(other.to_string()),
                }
            }
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::Backspace
                | Key::Delete
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::ArrowUp
                | Key::ArrowDown
                | Key::Tab
                | Key::Enter
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                meta: false,
            },
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: false,
                meta: true,
            },
        }
    }

    pub fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    /// Select-all and clipboard combinations (Ctrl/Cmd + A, C, V, X).
    pub fn is_clipboard_combo(&self) -> bool {
        self.modifiers.command()
            && matches!(self.key, Key::Char(c) if matches!(c.to_ascii_lowercase(), 'a' | 'c' | 'v' | 'x'))
    }
}

/// Page-level shortcuts handled by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Submit,
    ClearAll,
}

impl Shortcut {
    pub fn from_press(press: &KeyPress) -> Option<Self> {
        if !press.modifiers.command() {
            return None;
        }
        match press.key {
            Key::Enter => Some(Shortcut::Submit),
            Key::Char('r') | Key::Char('R') => Some(Shortcut::ClearAll),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_names_become_chars() {
        assert_eq!(Key::from_name("7"), Key::Char('7'));
        assert_eq!(Key::from_name(","), Key::Char(','));
        assert_eq!(Key::from_name("Escape"), Key::Named("Escape".into()));
    }

    #[test]
    fn shortcuts_need_a_command_modifier() {
        assert_eq!(Shortcut::from_press(&KeyPress::plain(Key::Enter)), None);
        assert_eq!(
            Shortcut::from_press(&KeyPress::meta(Key::Enter)),
            Some(Shortcut::Submit)
        );
        assert_eq!(
            Shortcut::from_press(&KeyPress::ctrl(Key::Char('r'))),
            Some(Shortcut::ClearAll)
        );
    }
}
