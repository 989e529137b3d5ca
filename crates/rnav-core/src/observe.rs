#![forbid(unsafe_code)]

//! Size observation primitive.
//!
//! # Design
//!
//! [`SizeFeed`] wraps the last known box size of one observed element in
//! shared, reference-counted storage (`Rc<RefCell<..>>`). When the size
//! changes (by `PartialEq`), all live subscribers are notified in
//! registration order. Subscribing fires the callback once immediately with
//! the current size: consumers must see a measurement at least once on
//! mount, even when the element never resizes afterwards.
//!
//! A host shell owns one feed per observed element (the menu container,
//! each top-level item, the rest trigger) and pushes real measurements into
//! it; the menu side holds subscriptions. The transport producing those
//! measurements is out of scope here.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each size-changing mutation.
//! 2. `set(s)` where `s == current` is a no-op — redundant delivery of the
//!    same size never re-notifies.
//! 3. Subscribers are notified in registration order.
//! 4. A new subscriber is called once with the current size before `subscribe`
//!    returns.
//! 5. Dead subscribers (dropped [`Subscription`] guards) are pruned lazily.
//!
//! # Failure Modes
//!
//! - **Re-entrant set**: calling `set()` from within a subscriber callback
//!   panics (RefCell borrow rules). Re-entrant mutation indicates a design
//!   bug in the subscriber graph.
//! - **Subscriber leak**: `Subscription` guards stored indefinitely keep
//!   callbacks alive. Dead weak references are cleaned lazily on notify.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Observed box size of one element, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

type CallbackRc = Rc<dyn Fn(Size)>;
type CallbackWeak = Weak<dyn Fn(Size)>;

/// Shared interior for [`SizeFeed`].
struct FeedInner {
    size: Size,
    version: u64,
    /// Subscribers stored as weak references. Dead entries are pruned on notify.
    subscribers: Vec<CallbackWeak>,
}

/// A shared, version-tracked element size with change notification.
///
/// Cloning a `SizeFeed` creates a new handle to the **same** inner state —
/// both handles see the same size and share subscribers.
pub struct SizeFeed {
    inner: Rc<RefCell<FeedInner>>,
}

// Manual Clone: shares the same Rc.
impl Clone for SizeFeed {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for SizeFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SizeFeed")
            .field("size", &inner.size)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl Default for SizeFeed {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

impl SizeFeed {
    /// Create a feed with the given initial size.
    ///
    /// The initial version is 0 and no subscribers are registered. A zero
    /// size means "not yet measured" to downstream consumers.
    #[must_use]
    pub fn new(initial: Size) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FeedInner {
                size: initial,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The current size.
    #[must_use]
    pub fn get(&self) -> Size {
        self.inner.borrow().size
    }

    /// Push a new measurement. If it differs from the current size, the
    /// version is incremented and all live subscribers are notified.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from within a subscriber callback.
    pub fn set(&self, size: Size) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.size == size {
                return;
            }
            inner.size = size;
            inner.version += 1;
        }
        self.notify();
    }

    /// Subscribe to size changes.
    ///
    /// The callback is invoked once immediately with the current size, then
    /// again on every subsequent change. Returns a [`Subscription`] guard;
    /// dropping the guard unsubscribes (the callback may remain in the
    /// subscriber list until the next notify prunes it, but is never called
    /// after drop).
    pub fn subscribe(&self, callback: impl Fn(Size) + 'static) -> Subscription {
        let strong: CallbackRc = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        let current = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.push(weak);
            inner.size
        };
        // Initial delivery happens outside the borrow so the callback may
        // read the feed (but not mutate it).
        strong(current);
        Subscription { _guard: strong }
    }

    /// Current version number. Increments by 1 on each size-changing
    /// mutation. Useful for dirty-checking.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of currently registered subscribers (including dead ones not
    /// yet pruned).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first, to avoid holding the borrow during calls.
        let callbacks: Vec<CallbackRc> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(|w| w.upgrade())
                .collect()
        };

        let size = self.inner.borrow().size;
        for cb in &callbacks {
            cb(size);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the `Subscription` releases the strong reference to the
/// callback, so the `Weak` in the feed's subscriber list fails to upgrade
/// on the next notification cycle.
pub struct Subscription {
    _guard: CallbackRc,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
