#![forbid(unsafe_code)]

//! Overflow fit solver for a horizontal menu row.
//!
//! Given the container's inner width, the ordered widths of every declared
//! item, and the width reserved for the rest (overflow) trigger, [`fit`]
//! computes how many leading items stay visible and whether the rest
//! trigger occupies its slot. The solver is pure — no state, no I/O — and
//! safe to invoke redundantly from resize bursts.
//!
//! The evaluation is two-phase. Phase one assumes nothing overflows and
//! reserves no space for the rest trigger; if the full row fits, that is
//! the answer. Otherwise phase two re-evaluates with the rest slot
//! reserved, because the trigger itself consumes width and can flip items
//! in or out of the visible prefix.
//!
//! # Invariants
//!
//! 1. `visible <= widths.len()`.
//! 2. The visible set is a prefix of declaration order: ties always favor
//!    earlier-declared items.
//! 3. Holding item widths fixed, `visible` is monotonically non-increasing
//!    as the container narrows.
//! 4. `rest_shown` exactly when at least one item overflowed.
//! 5. An unmeasured container (`None` or zero) keeps every item visible
//!    with no rest trigger — the pre-measurement row renders in full.
//!
//! # Example
//!
//! ```
//! use rnav_layout::fit;
//!
//! // Three items of width 20 in a 41-cell container, rest trigger 10 wide:
//! // only one item fits alongside the reserved rest slot.
//! let plan = fit(Some(41), &[20, 20, 20], 10);
//! assert_eq!(plan.visible, 1);
//! assert!(plan.rest_shown);
//! ```

use serde::{Deserialize, Serialize};

/// Result of one fit computation: the visible/overflow split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FitPlan {
    /// Number of leading items kept visible.
    pub visible: usize,
    /// Whether the rest trigger occupies its slot.
    pub rest_shown: bool,
}

impl FitPlan {
    /// The plan that shows every one of `count` items with no rest trigger.
    #[must_use]
    pub const fn all_visible(count: usize) -> Self {
        Self {
            visible: count,
            rest_shown: false,
        }
    }

    /// Number of items routed into overflow, out of `total` declared.
    #[must_use]
    pub const fn overflowed(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }
}

/// Compute the visible prefix for a row of `widths` inside `container`.
///
/// `container` is the menu root's latest inner width; `None` or `Some(0)`
/// mean "not yet measured" and keep the full row visible. `rest_width` is
/// the width reserved for the rest trigger *if* anything overflows; it is
/// not reserved when the whole row fits. Unmeasured item widths are
/// reported as 0 by the caller and simply contribute nothing to the sum.
#[must_use]
pub fn fit(container: Option<u16>, widths: &[u16], rest_width: u16) -> FitPlan {
    let count = widths.len();
    let Some(limit) = container.filter(|w| *w > 0) else {
        return FitPlan::all_visible(count);
    };
    let limit = u32::from(limit);

    // Phase one: tentatively assume no overflow, reserve nothing.
    let total = widths
        .iter()
        .fold(0u32, |sum, &w| sum.saturating_add(u32::from(w)));
    if total <= limit {
        return FitPlan::all_visible(count);
    }

    // Phase two: something overflows, so the rest slot consumes width too.
    // Take the longest prefix whose running sum plus the reservation fits.
    let reserve = u32::from(rest_width);
    let mut sum = 0u32;
    let mut visible = 0usize;
    for &width in widths {
        let next = sum.saturating_add(u32::from(width));
        if next.saturating_add(reserve) > limit {
            break;
        }
        sum = next;
        visible += 1;
    }

    FitPlan {
        visible,
        rest_shown: true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
