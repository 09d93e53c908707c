use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};

/// Terminal input the demo reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed at a cell
    Click { x: u16, y: u16, button: MouseButton },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Input {
    /// Convert a crossterm event, dropping the ones the demo ignores
    /// (key releases, mouse moves, focus reports, pastes).
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            }) => Key::from_code(code).map(|key| Input::Key {
                key,
                modifiers: modifiers.into(),
            }),
            CrosstermEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(button),
                column,
                row,
                ..
            }) => Some(Input::Click {
                x: column,
                y: row,
                button: button.into(),
            }),
            CrosstermEvent::Resize(width, height) => Some(Input::Resize { width, height }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Tab,
    BackTab,
    Escape,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(c) => Some(Key::Char(c)),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::BackTab => Some(Key::BackTab),
            KeyCode::Esc => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseButton as CtBtn};

    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn key_press_converts() {
        let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(
            Input::from_crossterm(event),
            Some(Input::Key {
                key: Key::Char('c'),
                modifiers: Modifiers::ctrl(),
            })
        );
    }

    #[test]
    fn key_release_is_dropped() {
        let event = key_event(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(Input::from_crossterm(event), None);
    }

    #[test]
    fn unsupported_keys_are_dropped() {
        for code in [KeyCode::Up, KeyCode::Enter] {
            let event = key_event(code, KeyModifiers::NONE, KeyEventKind::Press);
            assert_eq!(Input::from_crossterm(event), None);
        }
    }

    #[test]
    fn shifted_char_keeps_no_modifier() {
        let event = key_event(KeyCode::Char('M'), KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(
            Input::from_crossterm(event),
            Some(Input::Key {
                key: Key::Char('M'),
                modifiers: Modifiers::new(),
            })
        );
    }

    #[test]
    fn mouse_down_is_a_click() {
        let event = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(CtBtn::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            Input::from_crossterm(event),
            Some(Input::Click {
                x: 4,
                y: 7,
                button: MouseButton::Left,
            })
        );
    }
}
