#![forbid(unsafe_code)]

//! Key record registry: declaration order and the visible/overflow partition.
//!
//! One registry exists per menu instance and owns the ordered list of
//! declared keys plus the derived split between the visible prefix and the
//! overflowed suffix. It is deliberately not process-wide state: everything
//! lives in the owning [`crate::menu::OverflowMenu`].
//!
//! # Invariants
//!
//! 1. Declaration order is insertion order and is immutable for the
//!    lifetime of a key.
//! 2. The partition is always a prefix/suffix split of declaration order —
//!    never interleaved.
//! 3. Applying the same [`FitPlan`] twice is idempotent; the partition is a
//!    pure function of the latest plan.

use rnav_core::key::ItemKey;
use rnav_layout::FitPlan;
use rustc_hash::FxHashMap;

/// Ordered key list plus the visible/overflow split.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    /// Caller keys in declaration order.
    order: Vec<ItemKey>,
    /// Key → position in `order`.
    index: FxHashMap<ItemKey, usize>,
    /// Split point: `order[..visible]` is the visible prefix.
    visible: usize,
    /// Whether the rest trigger currently occupies its slot.
    rest_shown: bool,
}

impl KeyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a caller key at the end of declaration order.
    ///
    /// Duplicate registration is a caller bug surfaced by a
    /// development-build assertion; release builds keep the first
    /// registration. The sentinel rest key is implicit and never
    /// registered.
    pub fn register(&mut self, key: ItemKey) {
        debug_assert!(
            !key.is_rest(),
            "the rest trigger is implicit and never registered"
        );
        debug_assert!(!self.index.contains_key(&key), "duplicate menu key: {key}");
        if key.is_rest() || self.index.contains_key(&key) {
            return;
        }
        self.index.insert(key.clone(), self.order.len());
        self.order.push(key);
        if !self.rest_shown {
            // Until the next fit pass, an item appended to a row with no
            // overflow belongs to the visible prefix.
            self.visible = self.order.len();
        }
    }

    /// Unregister a key. Unknown keys are a no-op.
    ///
    /// Returns whether the key was present.
    pub fn unregister(&mut self, key: &ItemKey) -> bool {
        let Some(pos) = self.index.remove(key) else {
            return false;
        };
        self.order.remove(pos);
        for (i, k) in self.order.iter().enumerate().skip(pos) {
            self.index.insert(k.clone(), i);
        }
        if pos < self.visible {
            self.visible -= 1;
        }
        true
    }

    /// Number of declared keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no keys are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All declared keys in declaration order.
    #[must_use]
    pub fn keys(&self) -> &[ItemKey] {
        &self.order
    }

    /// Declaration-order position of a key.
    #[must_use]
    pub fn position(&self, key: &ItemKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Whether a key is declared.
    #[must_use]
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.index.contains_key(key)
    }

    /// Apply a freshly computed fit plan.
    ///
    /// Idempotent: applying the same plan any number of times leaves the
    /// same partition.
    pub fn apply(&mut self, plan: &FitPlan) {
        debug_assert!(plan.visible <= self.order.len());
        self.visible = plan.visible.min(self.order.len());
        self.rest_shown = plan.rest_shown;
    }

    /// The visible prefix, in declaration order.
    #[must_use]
    pub fn visible_keys(&self) -> &[ItemKey] {
        &self.order[..self.visible]
    }

    /// The overflowed suffix, in declaration order.
    #[must_use]
    pub fn overflowed_keys(&self) -> &[ItemKey] {
        &self.order[self.visible..]
    }

    /// Whether the rest trigger currently occupies its slot.
    #[must_use]
    pub fn rest_shown(&self) -> bool {
        self.rest_shown
    }

    /// Whether a key currently renders inside the rest trigger.
    ///
    /// The sentinel itself and unknown keys are not overflowed.
    #[must_use]
    pub fn is_overflowed(&self, key: &ItemKey) -> bool {
        match self.position(key) {
            Some(pos) => pos >= self.visible,
            None => false,
        }
    }

    /// Where a key is reachable from the visible row.
    ///
    /// Visible keys map to themselves; overflowed keys are reachable only
    /// through the rest trigger, so they map to [`ItemKey::Rest`] — as does
    /// the sentinel itself.
    #[must_use]
    pub fn nearest_visible(&self, key: &ItemKey) -> ItemKey {
        if key.is_rest() || self.is_overflowed(key) {
            ItemKey::Rest
        } else {
            key.clone()
        }
    }

    /// Keyboard traversal order: the visible prefix, then the rest trigger
    /// when it holds any overflowed items.
    #[must_use]
    pub fn nav_order(&self) -> Vec<ItemKey> {
        let mut order: Vec<ItemKey> = self.visible_keys().to_vec();
        if self.rest_shown && self.visible < self.order.len() {
            order.push(ItemKey::Rest);
        }
        order
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
