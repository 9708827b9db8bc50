//! Adapter utilities for the `pagetiler` crate.
//!
//! The `pagetiler` crate is UI-agnostic and focuses on the tiling math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by hosts:
//!
//! - A simulated scrollable viewport ([`SimViewport`]) with shared state,
//!   usable as the `Viewport` collaborator in tests and terminal hosts
//! - A notification driver ([`Driver`]) that plays the host's role: it
//!   writes the offset, forwards the matching notifications, snaps drags to
//!   page boundaries, and settles animated moves
//!
//! This crate is intentionally framework-agnostic (no UI toolkit bindings).
#![forbid(unsafe_code)]

mod driver;
mod sim;


pub use driver::Driver;
pub use sim::{SequentialIds, SimSource, SimViewport};
