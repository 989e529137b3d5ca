#![forbid(unsafe_code)]

//! Canonical key input events.
//!
//! The menu engine is transport-agnostic: a host shell decodes whatever its
//! input source produces (terminal escape sequences, window events) into
//! these normalized values before handing them to the keyboard dispatcher.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const ALT   = 1 << 1;
        const CTRL  = 1 << 2;
    }
}

/// A decoded key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Whether a key event is a press or a release.
///
/// Hosts that cannot report releases deliver only `Press`; the dispatcher
/// acts on presses and ignores releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
}

/// A single key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a plain key press with no modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key release with no modifiers.
    #[must_use]
    pub const fn release(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Release,
        }
    }
}

/// Navigation intent along the menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    /// Forward in declaration order.
    Next,
    /// Backward in declaration order.
    Prev,
    /// Jump to the first reachable entry.
    First,
    /// Jump to the last reachable entry.
    Last,
}

impl NavDirection {
    /// All four directions.
    pub const ALL: [NavDirection; 4] = [
        NavDirection::Next,
        NavDirection::Prev,
        NavDirection::First,
        NavDirection::Last,
    ];
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_has_empty_modifiers() {
        let ev = KeyEvent::press(KeyCode::Down);
        assert_eq!(ev.modifiers, Modifiers::empty());
        assert_eq!(ev.kind, KeyEventKind::Press);
    }

    #[test]
    fn release_is_distinct_from_press() {
        assert_ne!(KeyEvent::press(KeyCode::Left), KeyEvent::release(KeyCode::Left));
    }

    #[test]
    fn modifier_bits_compose() {
        let mods = Modifiers::SHIFT | Modifiers::CTRL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
    }
}
