#![forbid(unsafe_code)]

//! The overflow menu engine.
//!
//! [`OverflowMenu`] composes the size tracker, the fit solver, the key
//! registry, the active-key state machine, and the keyboard dispatcher
//! behind one caller-facing surface. Every accepted measurement triggers a
//! full, synchronous, idempotent recomputation of the visible/overflow
//! partition — there is no incremental patching and no internal
//! scheduling, so redundant invocation is always safe.
//!
//! The rendering collaborator consumes [`RenderPlan`], a pure projection
//! of current state. The rest trigger is always present in the plan;
//! `rest.shown == false` means "render at zero opacity, keep the layout
//! slot" so that toggling overflow does not thrash the row layout.

use serde::{Deserialize, Serialize};

use rnav_core::event::KeyEvent;
use rnav_core::key::ItemKey;
use rnav_layout::fit;

use crate::active::{ActiveKeyMachine, ActiveKeyState, OpenChange};
use crate::keyboard::{KeyboardDispatcher, NavBehavior};
use crate::registry::KeyRegistry;
use crate::tracker::SizeTracker;

/// Which slot an item renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Directly in the visible row.
    Row,
    /// Inside the rest trigger's submenu.
    Rest,
}

/// Render instruction for one declared item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlan {
    pub key: ItemKey,
    pub slot: Slot,
    /// Highlight as the active entry. Identity-stable: an active item keeps
    /// its highlight when it moves into the rest submenu.
    pub active: bool,
}

/// Render instruction for the rest trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestPlan {
    /// Occupies its slot visibly; `false` means zero-opacity placeholder.
    pub shown: bool,
    /// Highlight as active — true when the active key is the sentinel or
    /// any overflowed item (the trigger is their visible container).
    pub active: bool,
    /// The rest submenu is open.
    pub open: bool,
}

/// Pure projection of the menu's current state for the rendering
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Every declared item in declaration order, with its slot assignment.
    pub items: Vec<ItemPlan>,
    pub rest: RestPlan,
    /// The active key, independent of where it renders.
    pub active: Option<ItemKey>,
    /// The key whose submenu is open, if any.
    pub open: Option<ItemKey>,
}

impl RenderPlan {
    /// Keys rendered directly in the row, in declaration order.
    #[must_use]
    pub fn visible_keys(&self) -> Vec<&ItemKey> {
        self.items
            .iter()
            .filter(|item| item.slot == Slot::Row)
            .map(|item| &item.key)
            .collect()
    }

    /// Keys rendered inside the rest trigger, in declaration order.
    #[must_use]
    pub fn overflowed_keys(&self) -> Vec<&ItemKey> {
        self.items
            .iter()
            .filter(|item| item.slot == Slot::Rest)
            .map(|item| &item.key)
            .collect()
    }
}

/// Responsive overflow menu engine.
///
/// # Example
///
/// ```
/// use rnav_core::key::ItemKey;
/// use rnav_menu::OverflowMenu;
///
/// let mut menu = OverflowMenu::new();
/// menu.declare_item("light");
/// menu.declare_item("bamboo");
/// menu.declare_item("little");
///
/// // Before any measurement the full row renders (SSR determinism).
/// assert_eq!(menu.render_plan().visible_keys().len(), 3);
///
/// menu.set_container_width(41);
/// menu.report_rest_width(10);
/// for key in ["light", "bamboo", "little"] {
///     menu.report_item_width(&ItemKey::from(key), 20);
/// }
///
/// let plan = menu.render_plan();
/// assert_eq!(plan.visible_keys().len(), 1);
/// assert!(plan.rest.shown);
/// ```
#[derive(Debug, Default)]
pub struct OverflowMenu {
    registry: KeyRegistry,
    tracker: SizeTracker,
    machine: ActiveKeyMachine,
    dispatcher: KeyboardDispatcher,
}

impl OverflowMenu {
    /// Create an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: end-of-row keyboard behavior (wrap by default).
    #[must_use]
    pub fn with_nav_behavior(mut self, behavior: NavBehavior) -> Self {
        self.dispatcher = KeyboardDispatcher::new(behavior);
        self
    }

    // --- Declaration ---

    /// Declare an item at the end of the row. Declaration order is display
    /// order. Duplicate keys are a caller bug (development-build
    /// assertion).
    pub fn declare_item(&mut self, key: impl Into<ItemKey>) {
        let key = key.into();
        debug_assert!(!key.is_rest(), "the rest trigger cannot be declared");
        if key.is_rest() {
            return;
        }
        self.tracker.mount(&key);
        self.registry.register(key);
        self.recompute();
    }

    /// Remove a declared item. Unknown keys are a no-op. Size reports
    /// arriving for the key afterwards are dropped as stale.
    pub fn remove_item(&mut self, key: &ItemKey) {
        if !self.registry.unregister(key) {
            return;
        }
        self.tracker.unmount(key);
        self.machine.prune(key);
        self.recompute();
    }

    // --- Measurement ---

    /// Report the container's inner width.
    pub fn set_container_width(&mut self, width: u16) {
        if self.tracker.set_container(width) {
            self.recompute();
        }
    }

    /// Report one item's rendered width.
    pub fn report_item_width(&mut self, key: &ItemKey, width: u16) {
        if self.tracker.report(key, width) {
            self.recompute();
        }
    }

    /// Report the rest trigger's rendered width (its reservation).
    pub fn report_rest_width(&mut self, width: u16) {
        if self.tracker.report(&ItemKey::Rest, width) {
            self.recompute();
        }
    }

    // --- Active key ---

    /// Controlled active key: takes precedence over internal mutation
    /// until [`clear_controlled_active`](Self::clear_controlled_active).
    pub fn set_controlled_active(&mut self, key: Option<ItemKey>) {
        self.machine.set_controlled_active(key);
    }

    /// Return active-key ownership to the engine.
    pub fn clear_controlled_active(&mut self) {
        self.machine.clear_controlled_active();
    }

    /// Internally activate a key (host hover/focus). Suppressed in
    /// controlled mode.
    pub fn activate(&mut self, key: ItemKey) -> bool {
        self.machine.activate(key)
    }

    /// Open the active key's submenu (a host click on the active root).
    /// Emits one open notification; open/close bookkeeping applies in
    /// controlled mode too.
    pub fn open_active(&mut self) -> bool {
        self.machine.open_active()
    }

    /// Close the open submenu, keeping its key active.
    pub fn close_submenu(&mut self) -> bool {
        self.machine.close()
    }

    /// Handle one key event. Returns whether it was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        self.dispatcher
            .dispatch(event, &self.registry, &mut self.machine)
    }

    /// Drain pending open-change notifications, oldest first.
    pub fn take_open_changes(&mut self) -> Vec<OpenChange> {
        self.machine.take_open_changes()
    }

    // --- Introspection ---

    /// The key registry (declaration order and partition).
    #[must_use]
    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// The active-key state.
    #[must_use]
    pub fn active_state(&self) -> &ActiveKeyState {
        self.machine.state()
    }

    /// Dropped stale size reports since creation.
    #[must_use]
    pub fn stale_reports(&self) -> u64 {
        self.tracker.stale_reports()
    }

    /// Build the render plan for the rendering collaborator.
    ///
    /// Deterministic and pure: before any measurement every declared item
    /// is in the row and the rest trigger is a hidden placeholder.
    #[must_use]
    pub fn render_plan(&self) -> RenderPlan {
        let active = self.machine.active_key().cloned();
        let open = self.machine.open_key().cloned();

        let items = self
            .registry
            .keys()
            .iter()
            .map(|key| ItemPlan {
                key: key.clone(),
                slot: if self.registry.is_overflowed(key) {
                    Slot::Rest
                } else {
                    Slot::Row
                },
                active: active.as_ref() == Some(key),
            })
            .collect();

        let rest_active = active
            .as_ref()
            .is_some_and(|key| self.registry.nearest_visible(key).is_rest());

        RenderPlan {
            items,
            rest: RestPlan {
                shown: self.registry.rest_shown(),
                active: rest_active,
                open: open == Some(ItemKey::Rest),
            },
            active,
            open,
        }
    }

    /// Recompute the partition from the latest snapshot.
    ///
    /// Pure function of (container, widths, rest width); safe to invoke
    /// redundantly.
    fn recompute(&mut self) {
        let widths = self.tracker.widths_in(self.registry.keys());
        let plan = fit(
            self.tracker.container(),
            &widths,
            self.tracker.rest_width(),
        );
        let changed = plan.visible != self.registry.visible_keys().len()
            || plan.rest_shown != self.registry.rest_shown();
        if changed {
            tracing::debug!(
                visible = plan.visible,
                total = self.registry.len(),
                rest_shown = plan.rest_shown,
                "overflow partition changed"
            );
        }
        self.registry.apply(&plan);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
