#![forbid(unsafe_code)]

//! Core: key identity, input events, and size observation.
//!
//! # Role in RNav
//! `rnav-core` is the vocabulary layer. It owns the key type shared by the
//! registry and the active-key machinery, the normalized input events the
//! keyboard dispatcher consumes, and the size-observation primitive that
//! feeds measurements into the menu engine.
//!
//! # Primary responsibilities
//! - **ItemKey**: caller keys plus the synthetic overflow ("rest") key as a
//!   distinguished variant.
//! - **Event**: canonical key input (codes, modifiers, press/release).
//! - **SizeFeed**: observed element size with change notification and an
//!   at-least-once-on-subscribe guarantee.
//!
//! # How it fits in the system
//! The menu engine (`rnav-menu`) consumes `rnav-core` keys and events and
//! binds `SizeFeed` subscriptions to its size tracker. The fit solver
//! (`rnav-layout`) is independent of input, so `rnav-core` is the clean
//! bridge between a host shell and the deterministic overflow pipeline.

pub mod event;
pub mod key;
pub mod logging;
pub mod observe;

pub use key::ItemKey;
pub use observe::{Size, SizeFeed, Subscription};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
