#![forbid(unsafe_code)]

//! A reference host shell for tests.
//!
//! [`MenuHost`] mounts an [`OverflowMenu`] the way a real shell does: one
//! [`SizeFeed`] per observed element (container, each item, the rest
//! trigger), with subscriptions forwarding measurements into the engine.
//! [`MenuHost::remount`] models strict/double-invoke mounting — it
//! resubscribes every feed and only then drops the stale guards, so each
//! element is briefly observed twice. A correct engine sees no duplicate
//! notifications and loses no first measurement.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use rnav_core::key::ItemKey;
use rnav_core::observe::{Size, SizeFeed, Subscription};
use rnav_menu::{OverflowMenu, RenderPlan};

/// A menu wired to per-element size feeds.
pub struct MenuHost {
    menu: Rc<RefCell<OverflowMenu>>,
    container: SizeFeed,
    rest: SizeFeed,
    items: Vec<(ItemKey, SizeFeed)>,
    subscriptions: Vec<Subscription>,
}

impl MenuHost {
    /// Declare the given items and subscribe every feed.
    ///
    /// Feeds start at zero size, which the engine reads as "not yet
    /// measured" — the initial plan renders the full row.
    #[must_use]
    pub fn mount(keys: &[&str]) -> Self {
        let menu = Rc::new(RefCell::new(OverflowMenu::new()));
        for key in keys {
            menu.borrow_mut().declare_item(*key);
        }
        let mut host = Self {
            menu,
            container: SizeFeed::default(),
            rest: SizeFeed::default(),
            items: keys
                .iter()
                .map(|key| (ItemKey::from(*key), SizeFeed::default()))
                .collect(),
            subscriptions: Vec::new(),
        };
        host.subscribe_all();
        host
    }

    /// Strict/double-invoke remount: subscribe everything again, then drop
    /// the stale guards.
    pub fn remount(&mut self) {
        let stale = std::mem::take(&mut self.subscriptions);
        self.subscribe_all();
        drop(stale);
    }

    /// Push a container measurement through its feed.
    pub fn resize_container(&self, width: u16) {
        self.container.set(Size::new(width, 1));
    }

    /// Push an item measurement through its feed.
    ///
    /// # Panics
    ///
    /// Panics when the key was never mounted — a test-harness misuse.
    pub fn resize_item(&self, key: &ItemKey, width: u16) {
        let feed = self
            .items
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, feed)| feed)
            .unwrap_or_else(|| panic!("no feed mounted for {key}"));
        feed.set(Size::new(width, 1));
    }

    /// Push a rest-trigger measurement through its feed.
    pub fn resize_rest(&self, width: u16) {
        self.rest.set(Size::new(width, 1));
    }

    /// Remove an item from the menu while leaving its feed (and
    /// subscription) alive: later feed updates become stale reports the
    /// engine must drop.
    pub fn remove_item(&self, key: &ItemKey) {
        self.menu.borrow_mut().remove_item(key);
    }

    /// Borrow the engine.
    #[must_use]
    pub fn menu(&self) -> Ref<'_, OverflowMenu> {
        self.menu.borrow()
    }

    /// Mutably borrow the engine (keyboard input, controlled updates).
    #[must_use]
    pub fn menu_mut(&self) -> RefMut<'_, OverflowMenu> {
        self.menu.borrow_mut()
    }

    /// The current render plan.
    #[must_use]
    pub fn plan(&self) -> RenderPlan {
        self.menu.borrow().render_plan()
    }

    fn subscribe_all(&mut self) {
        let menu = Rc::clone(&self.menu);
        self.subscriptions.push(
            self.container
                .subscribe(move |size| menu.borrow_mut().set_container_width(size.width)),
        );

        let menu = Rc::clone(&self.menu);
        self.subscriptions.push(
            self.rest
                .subscribe(move |size| menu.borrow_mut().report_rest_width(size.width)),
        );

        for (key, feed) in &self.items {
            let menu = Rc::clone(&self.menu);
            let key = key.clone();
            self.subscriptions
                .push(feed.subscribe(move |size| {
                    menu.borrow_mut().report_item_width(&key, size.width);
                }));
        }
    }
}

impl std::fmt::Debug for MenuHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuHost")
            .field("items", &self.items.len())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
