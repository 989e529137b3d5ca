#![forbid(unsafe_code)]

//! Responsive overflow menu engine.
//!
//! # Role in RNav
//! `rnav-menu` is the stateful layer. It owns the key registry (declaration
//! order plus the visible/overflow partition), the size tracker, the
//! active-key state machine, and the keyboard dispatcher, and composes them
//! into [`OverflowMenu`].
//!
//! # How it fits in the system
//! A host shell feeds measurements and key events in; the engine hands a
//! deterministic [`RenderPlan`] out. The fit computation itself lives in
//! `rnav-layout` and stays pure; everything mutable is per-instance state
//! owned here — nothing is process-wide.
//!
//! # Concurrency
//! Single-threaded and callback-driven. Every accepted report triggers a
//! full synchronous recomputation from latest-known sizes; recomputation is
//! idempotent, so burst ordering and redundant delivery are harmless.

pub mod active;
pub mod keyboard;
pub mod menu;
pub mod registry;
pub mod tracker;


pub use active::{ActiveKeyMachine, ActiveKeyState, OpenChange};
pub use keyboard::{KeyboardDispatcher, NavBehavior};
pub use menu::{ItemPlan, OverflowMenu, RenderPlan, RestPlan, Slot};
pub use registry::KeyRegistry;
pub use tracker::SizeTracker;
