#![forbid(unsafe_code)]

//! Keyboard navigation dispatcher.
//!
//! Maps directional key presses onto active-key transitions. Traversal
//! order is the registry's [`nav_order`](crate::registry::KeyRegistry::nav_order):
//! the visible prefix in declaration order, then the rest trigger when it
//! holds overflowed items. Hidden items are never direct targets — they are
//! reachable only by opening the rest trigger.

use rnav_core::event::{KeyCode, KeyEvent, KeyEventKind, NavDirection};
use rnav_core::key::ItemKey;

use crate::active::ActiveKeyMachine;
use crate::registry::KeyRegistry;

/// End-of-row behavior for forward/backward traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBehavior {
    /// Wrap from the last reachable entry to the first (and vice versa).
    pub wrap: bool,
}

impl NavBehavior {
    /// Wrap at the ends of the row (the default).
    #[must_use]
    pub const fn wrap() -> Self {
        Self { wrap: true }
    }

    /// Stop at the ends of the row.
    #[must_use]
    pub const fn stop() -> Self {
        Self { wrap: false }
    }
}

impl Default for NavBehavior {
    fn default() -> Self {
        Self::wrap()
    }
}

/// Stateless mapper from key events to active-key transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardDispatcher {
    behavior: NavBehavior,
}

impl KeyboardDispatcher {
    /// Create a dispatcher with the given end-of-row behavior.
    #[must_use]
    pub const fn new(behavior: NavBehavior) -> Self {
        Self { behavior }
    }

    /// Handle one key event. Returns whether it was consumed.
    ///
    /// `Left`/`Right` step along the row, `Home`/`End` jump to its ends,
    /// `Down` opens the rest trigger when it is the active-but-closed key,
    /// `Escape` closes an open submenu. Releases are ignored.
    pub fn dispatch(
        &self,
        event: &KeyEvent,
        registry: &KeyRegistry,
        machine: &mut ActiveKeyMachine,
    ) -> bool {
        if event.kind != KeyEventKind::Press {
            return false;
        }
        match event.code {
            KeyCode::Right => self.step(NavDirection::Next, registry, machine),
            KeyCode::Left => self.step(NavDirection::Prev, registry, machine),
            KeyCode::Home => self.step(NavDirection::First, registry, machine),
            KeyCode::End => self.step(NavDirection::Last, registry, machine),
            KeyCode::Down => {
                // The representative open transition: Down on the merely
                // active rest trigger opens its submenu. Navigation inside
                // an open submenu belongs to the submenu collaborator.
                if machine.active_key() == Some(&ItemKey::Rest) && machine.open_key().is_none() {
                    machine.open_active()
                } else {
                    false
                }
            }
            KeyCode::Escape => machine.close(),
            _ => false,
        }
    }

    fn step(
        &self,
        direction: NavDirection,
        registry: &KeyRegistry,
        machine: &mut ActiveKeyMachine,
    ) -> bool {
        let order = registry.nav_order();
        if order.is_empty() {
            return false;
        }
        let last = order.len() - 1;

        let target = match direction {
            NavDirection::First => order[0].clone(),
            NavDirection::Last => order[last].clone(),
            NavDirection::Next | NavDirection::Prev => {
                // A hidden active key navigates from its visible container,
                // the rest trigger.
                let current = machine
                    .active_key()
                    .map(|key| registry.nearest_visible(key))
                    .and_then(|key| order.iter().position(|k| *k == key));

                let Some(pos) = current else {
                    // Nothing active yet: seed at the near end of the row.
                    let seed = match direction {
                        NavDirection::Prev => last,
                        _ => 0,
                    };
                    return machine.activate(order[seed].clone());
                };

                let next = match direction {
                    NavDirection::Next if pos < last => pos + 1,
                    NavDirection::Next if self.behavior.wrap => 0,
                    NavDirection::Prev if pos > 0 => pos - 1,
                    NavDirection::Prev if self.behavior.wrap => last,
                    _ => return false,
                };
                order[next].clone()
            }
        };

        machine.activate(target)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
