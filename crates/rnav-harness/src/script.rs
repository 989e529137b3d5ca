#![forbid(unsafe_code)]

//! Scripted measurement bursts.
//!
//! A [`ResizeScript`] is an ordered list of size reports. Tests replay it
//! against a menu in declaration order, reversed, or with every step
//! doubled — the engine recomputes from latest-known state on every
//! report, so all replays must converge to the same partition once every
//! element has reported at least once.

use rnav_core::key::ItemKey;
use rnav_menu::OverflowMenu;

use crate::host::MenuHost;

/// One scripted size report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// The container's inner width.
    Container(u16),
    /// One item's rendered width.
    Item(ItemKey, u16),
    /// The rest trigger's rendered width.
    Rest(u16),
}

/// An ordered burst of size reports.
#[derive(Debug, Clone, Default)]
pub struct ResizeScript {
    steps: Vec<ScriptStep>,
}

impl ResizeScript {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a container measurement.
    #[must_use]
    pub fn container(mut self, width: u16) -> Self {
        self.steps.push(ScriptStep::Container(width));
        self
    }

    /// Append an item measurement.
    #[must_use]
    pub fn item(mut self, key: impl Into<ItemKey>, width: u16) -> Self {
        self.steps.push(ScriptStep::Item(key.into(), width));
        self
    }

    /// Append a rest-trigger measurement.
    #[must_use]
    pub fn rest(mut self, width: u16) -> Self {
        self.steps.push(ScriptStep::Rest(width));
        self
    }

    /// The scripted steps in order.
    #[must_use]
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Replay against the engine directly, in script order.
    pub fn drive(&self, menu: &mut OverflowMenu) {
        for step in &self.steps {
            Self::apply(step, menu);
        }
    }

    /// Replay in reverse order (late-arriving container, early items).
    pub fn drive_reversed(&self, menu: &mut OverflowMenu) {
        for step in self.steps.iter().rev() {
            Self::apply(step, menu);
        }
    }

    /// Replay with every report delivered twice back to back.
    pub fn drive_doubled(&self, menu: &mut OverflowMenu) {
        for step in &self.steps {
            Self::apply(step, menu);
            Self::apply(step, menu);
        }
    }

    /// Replay through a host's size feeds, exercising the observation
    /// layer instead of the engine surface.
    pub fn play(&self, host: &MenuHost) {
        for step in &self.steps {
            match step {
                ScriptStep::Container(width) => host.resize_container(*width),
                ScriptStep::Item(key, width) => host.resize_item(key, *width),
                ScriptStep::Rest(width) => host.resize_rest(*width),
            }
        }
    }

    fn apply(step: &ScriptStep, menu: &mut OverflowMenu) {
        match step {
            ScriptStep::Container(width) => menu.set_container_width(*width),
            ScriptStep::Item(key, width) => menu.report_item_width(key, *width),
            ScriptStep::Rest(width) => menu.report_rest_width(*width),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
