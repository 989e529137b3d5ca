#![forbid(unsafe_code)]

//! Active-key state machine.
//!
//! Owns the single source of truth for which top-level key is active and
//! whether its submenu is open. Consumers drain ordered [`OpenChange`]
//! notifications via [`ActiveKeyMachine::take_open_changes`].
//!
//! # Invariants
//!
//! 1. At most one key is open at any time (by construction of
//!    [`ActiveKeyState`]).
//! 2. Switching the open submenu emits exactly two notifications, close of
//!    the previous key then open of the next, never interleaved.
//! 3. Layout reshuffles never reach this machine: active identity and open
//!    state are stable across resize; only the registry's answer to "where
//!    does this key render" changes.
//! 4. A controlled update always wins over internally computed transitions.

use std::collections::VecDeque;

use rnav_core::key::ItemKey;

/// Open/close notification delivered to external listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenChange {
    pub key: ItemKey,
    pub open: bool,
}

/// The three states of the active-key machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveKeyState {
    /// No key is active.
    #[default]
    Closed,
    /// A key is highlighted but its submenu is closed.
    ActiveClosed(ItemKey),
    /// A key is highlighted and its submenu is open.
    ActiveOpen(ItemKey),
}

impl ActiveKeyState {
    /// The active key, open or not.
    #[must_use]
    pub fn active_key(&self) -> Option<&ItemKey> {
        match self {
            Self::Closed => None,
            Self::ActiveClosed(key) | Self::ActiveOpen(key) => Some(key),
        }
    }

    /// The key whose submenu is open, if any.
    #[must_use]
    pub fn open_key(&self) -> Option<&ItemKey> {
        match self {
            Self::ActiveOpen(key) => Some(key),
            _ => None,
        }
    }
}

/// State machine coordinating active key, openness, and controlled mode.
#[derive(Debug, Default)]
pub struct ActiveKeyMachine {
    state: ActiveKeyState,
    /// External ownership of the active key. While set, internal
    /// activation is suppressed; open/close bookkeeping still applies.
    controlled: bool,
    events: VecDeque<OpenChange>,
}

impl ActiveKeyMachine {
    /// Create a machine with no active key, internally owned.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ActiveKeyState {
        &self.state
    }

    /// The active key, open or not.
    #[must_use]
    pub fn active_key(&self) -> Option<&ItemKey> {
        self.state.active_key()
    }

    /// The key whose submenu is open, if any.
    #[must_use]
    pub fn open_key(&self) -> Option<&ItemKey> {
        self.state.open_key()
    }

    /// Whether the active key is externally controlled.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Controlled update: force the active key from outside.
    ///
    /// A *changed* value forces `ActiveClosed(key)` (or `Closed` for
    /// `None`) regardless of the current state; re-asserting the current
    /// active key is not a change and keeps its open state. If the forced
    /// switch closes a submenu that was open, the close is still reported —
    /// listeners must not be left believing a submenu is open.
    pub fn set_controlled_active(&mut self, key: Option<ItemKey>) {
        self.controlled = true;
        if self.active_key() == key.as_ref() {
            return;
        }
        if let Some(prev) = self.open_key().cloned() {
            self.emit(prev, false);
        }
        let next = match key {
            Some(key) => ActiveKeyState::ActiveClosed(key),
            None => ActiveKeyState::Closed,
        };
        tracing::debug!(from = ?self.state, to = ?next, "controlled active-key update");
        self.state = next;
    }

    /// Return active-key ownership to the machine.
    ///
    /// The current state is kept; subsequent internal activation applies
    /// again.
    pub fn clear_controlled_active(&mut self) {
        self.controlled = false;
    }

    /// Internally activate a key (keyboard traversal, host hover).
    ///
    /// Suppressed in controlled mode. When a different submenu is open,
    /// activation transfers openness: the previous key closes, the new one
    /// opens, in that order.
    pub fn activate(&mut self, key: ItemKey) -> bool {
        if self.controlled {
            return false;
        }
        match &self.state {
            ActiveKeyState::ActiveOpen(prev) if *prev == key => false,
            ActiveKeyState::ActiveOpen(prev) => {
                let prev = prev.clone();
                self.emit(prev, false);
                self.emit(key.clone(), true);
                tracing::debug!(key = %key, "transfer open submenu");
                self.state = ActiveKeyState::ActiveOpen(key);
                true
            }
            ActiveKeyState::ActiveClosed(prev) if *prev == key => false,
            _ => {
                tracing::trace!(key = %key, "activate");
                self.state = ActiveKeyState::ActiveClosed(key);
                true
            }
        }
    }

    /// Open the active key's submenu.
    ///
    /// Only meaningful in `ActiveClosed`; emits one open notification.
    /// Open/close bookkeeping applies in controlled mode too.
    pub fn open_active(&mut self) -> bool {
        let ActiveKeyState::ActiveClosed(key) = &self.state else {
            return false;
        };
        let key = key.clone();
        self.emit(key.clone(), true);
        tracing::debug!(key = %key, "open submenu");
        self.state = ActiveKeyState::ActiveOpen(key);
        true
    }

    /// Close the open submenu, keeping its key active.
    pub fn close(&mut self) -> bool {
        let ActiveKeyState::ActiveOpen(key) = &self.state else {
            return false;
        };
        let key = key.clone();
        self.emit(key.clone(), false);
        tracing::debug!(key = %key, "close submenu");
        self.state = ActiveKeyState::ActiveClosed(key);
        true
    }

    /// Drop the active key entirely, closing its submenu first if open.
    pub fn deactivate(&mut self) {
        let _ = self.close();
        self.state = ActiveKeyState::Closed;
    }

    /// Bookkeeping for an undeclared key: if the active key was removed
    /// from the menu, it can no longer be active.
    pub fn prune(&mut self, removed: &ItemKey) {
        if self.active_key() == Some(removed) {
            tracing::debug!(key = %removed, "active key removed, deactivating");
            self.deactivate();
        }
    }

    /// Drain pending open-change notifications, oldest first.
    pub fn take_open_changes(&mut self) -> Vec<OpenChange> {
        self.events.drain(..).collect()
    }

    fn emit(&mut self, key: ItemKey, open: bool) {
        self.events.push_back(OpenChange { key, open });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> ItemKey {
        ItemKey::from(k)
    }

    // --- Activation ---

    #[test]
    fn activate_highlights_without_opening() {
        let mut machine = ActiveKeyMachine::new();
        assert!(machine.activate(key("a")));
        assert_eq!(machine.state(), &ActiveKeyState::ActiveClosed(key("a")));
        assert!(machine.take_open_changes().is_empty());
    }

    #[test]
    fn activate_same_key_is_noop() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(key("a"));
        assert!(!machine.activate(key("a")));
    }

    // --- Open / close ---

    #[test]
    fn open_active_emits_exactly_one_notification() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(ItemKey::Rest);
        assert!(machine.open_active());

        let events = machine.take_open_changes();
        assert_eq!(
            events,
            vec![OpenChange {
                key: ItemKey::Rest,
                open: true
            }]
        );
        assert_eq!(machine.open_key(), Some(&ItemKey::Rest));
    }

    #[test]
    fn open_without_active_key_is_noop() {
        let mut machine = ActiveKeyMachine::new();
        assert!(!machine.open_active());
        assert!(machine.take_open_changes().is_empty());
    }

    #[test]
    fn close_keeps_key_active() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(key("a"));
        machine.open_active();
        machine.take_open_changes();

        assert!(machine.close());
        assert_eq!(machine.state(), &ActiveKeyState::ActiveClosed(key("a")));
        assert_eq!(
            machine.take_open_changes(),
            vec![OpenChange {
                key: key("a"),
                open: false
            }]
        );
    }

    // --- Open transfer ---

    #[test]
    fn activating_another_key_while_open_closes_then_opens() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(key("a"));
        machine.open_active();
        machine.take_open_changes();

        assert!(machine.activate(key("b")));
        assert_eq!(
            machine.take_open_changes(),
            vec![
                OpenChange {
                    key: key("a"),
                    open: false
                },
                OpenChange {
                    key: key("b"),
                    open: true
                },
            ]
        );
        assert_eq!(machine.open_key(), Some(&key("b")));
    }

    // --- Controlled mode ---

    #[test]
    fn controlled_update_forces_active_closed() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(key("a"));
        machine.open_active();
        machine.take_open_changes();

        machine.set_controlled_active(Some(key("b")));
        assert_eq!(machine.state(), &ActiveKeyState::ActiveClosed(key("b")));
        // The forced switch closed a's submenu; listeners hear about it.
        assert_eq!(
            machine.take_open_changes(),
            vec![OpenChange {
                key: key("a"),
                open: false
            }]
        );
    }

    #[test]
    fn controlled_reassertion_of_active_key_keeps_openness() {
        let mut machine = ActiveKeyMachine::new();
        machine.set_controlled_active(Some(ItemKey::Rest));
        machine.open_active();
        machine.take_open_changes();

        machine.set_controlled_active(Some(ItemKey::Rest));
        assert_eq!(machine.open_key(), Some(&ItemKey::Rest));
        assert!(machine.take_open_changes().is_empty());
    }

    #[test]
    fn controlled_none_forces_closed() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(key("a"));
        machine.set_controlled_active(None);
        assert_eq!(machine.state(), &ActiveKeyState::Closed);
    }

    #[test]
    fn controlled_mode_suppresses_internal_activation() {
        let mut machine = ActiveKeyMachine::new();
        machine.set_controlled_active(Some(key("a")));
        assert!(!machine.activate(key("b")));
        assert_eq!(machine.active_key(), Some(&key("a")));
    }

    #[test]
    fn controlled_mode_still_allows_open_bookkeeping() {
        let mut machine = ActiveKeyMachine::new();
        machine.set_controlled_active(Some(ItemKey::Rest));
        assert!(machine.open_active());
        assert_eq!(
            machine.take_open_changes(),
            vec![OpenChange {
                key: ItemKey::Rest,
                open: true
            }]
        );
    }

    #[test]
    fn clearing_control_restores_internal_activation() {
        let mut machine = ActiveKeyMachine::new();
        machine.set_controlled_active(Some(key("a")));
        machine.clear_controlled_active();
        assert!(machine.activate(key("b")));
        assert_eq!(machine.active_key(), Some(&key("b")));
    }

    // --- Pruning ---

    #[test]
    fn prune_deactivates_removed_active_key() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(key("a"));
        machine.open_active();
        machine.take_open_changes();

        machine.prune(&key("a"));
        assert_eq!(machine.state(), &ActiveKeyState::Closed);
        assert_eq!(
            machine.take_open_changes(),
            vec![OpenChange {
                key: key("a"),
                open: false
            }]
        );
    }

    #[test]
    fn prune_ignores_other_keys() {
        let mut machine = ActiveKeyMachine::new();
        machine.activate(key("a"));
        machine.prune(&key("b"));
        assert_eq!(machine.active_key(), Some(&key("a")));
    }
}
