#![forbid(unsafe_code)]

//! Deterministic test drivers and fixtures for RNav.
//!
//! # Role in RNav
//! `rnav-harness` replaces the host shell in tests. [`MenuHost`] wires an
//! [`rnav_menu::OverflowMenu`] to per-element size feeds the way a real
//! shell would, including the strict/double-invoke remount shape.
//! [`ResizeScript`] replays measurement bursts in scripted, reversed, or
//! doubled order so order-independence and idempotence are checkable.
//!
//! Nothing here schedules time: the engine has no internal timers, so the
//! drivers only need to control delivery order, not a clock.

pub mod host;
pub mod script;

pub use host::MenuHost;
pub use script::{ResizeScript, ScriptStep};

use rnav_menu::RenderPlan;

/// Render a plan as pretty JSON for snapshot-style assertions.
#[must_use]
pub fn plan_snapshot(plan: &RenderPlan) -> String {
    serde_json::to_string_pretty(plan).expect("RenderPlan serializes to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnav_menu::OverflowMenu;

    #[test]
    fn snapshot_contains_keys_and_rest_state() {
        let mut menu = OverflowMenu::new();
        menu.declare_item("light");
        let snapshot = plan_snapshot(&menu.render_plan());
        assert!(snapshot.contains("light"));
        assert!(snapshot.contains("\"shown\": false"));
    }
}
