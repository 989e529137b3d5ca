#![forbid(unsafe_code)]

//! Size tracker: latest known container and item widths.
//!
//! The tracker is the write side of the measurement pipeline. A host shell
//! (or the harness) pushes size reports into it; the menu engine reads the
//! latest-known snapshot out of it to drive the fit solver. Reports may
//! arrive in bursts and in any interleaving — the tracker only stores the
//! newest value per element, so recomputation from it is a pure function
//! of current state.
//!
//! # Failure Modes
//!
//! - **Stale reports**: a report for a key that was never mounted, or was
//!   already unmounted, must not resurrect the item in the overflow
//!   computation. Such reports are dropped and counted in
//!   [`SizeTracker::stale_reports`].

use rnav_core::key::ItemKey;
use rustc_hash::FxHashMap;

/// Last known widths for the container, the declared items, and the rest
/// trigger. Unmeasured is `None`, never a negative or sentinel width.
#[derive(Debug, Default)]
pub struct SizeTracker {
    container: Option<u16>,
    widths: FxHashMap<ItemKey, Option<u16>>,
    rest: Option<u16>,
    version: u64,
    stale_reports: u64,
}

impl SizeTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unmeasured record for a newly declared item.
    pub fn mount(&mut self, key: &ItemKey) {
        if key.is_rest() {
            return;
        }
        self.widths.entry(key.clone()).or_insert(None);
    }

    /// Discard an item's record. Later reports for the key are stale.
    pub fn unmount(&mut self, key: &ItemKey) {
        if self.widths.remove(key).is_some() {
            self.version += 1;
        }
    }

    /// Record the container's inner width. Returns whether it changed.
    pub fn set_container(&mut self, width: u16) -> bool {
        if self.container == Some(width) {
            return false;
        }
        self.container = Some(width);
        self.version += 1;
        true
    }

    /// Record one element's rendered width. Returns whether the snapshot
    /// changed; stale reports return `false` and are only counted.
    pub fn report(&mut self, key: &ItemKey, width: u16) -> bool {
        if key.is_rest() {
            if self.rest == Some(width) {
                return false;
            }
            self.rest = Some(width);
            self.version += 1;
            return true;
        }
        match self.widths.get_mut(key) {
            Some(slot) => {
                if *slot == Some(width) {
                    return false;
                }
                *slot = Some(width);
                self.version += 1;
                true
            }
            None => {
                self.stale_reports += 1;
                tracing::debug!(key = %key, width, "dropping stale size report");
                false
            }
        }
    }

    /// The container's latest inner width, `None` before first measurement.
    #[must_use]
    pub fn container(&self) -> Option<u16> {
        self.container
    }

    /// The rest trigger's latest width; unmeasured reserves nothing.
    #[must_use]
    pub fn rest_width(&self) -> u16 {
        self.rest.unwrap_or(0)
    }

    /// Item widths in the order given, unmeasured reported as 0.
    #[must_use]
    pub fn widths_in(&self, order: &[ItemKey]) -> Vec<u16> {
        order
            .iter()
            .map(|key| self.widths.get(key).copied().flatten().unwrap_or(0))
            .collect()
    }

    /// Snapshot version; increments on every accepted change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of dropped stale reports since creation.
    #[must_use]
    pub fn stale_reports(&self) -> u64 {
        self.stale_reports
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
