// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hover: dwell-based pointer hover detection.
//!
//! A hover starts once the pointer has rested inside a small tolerance
//! rectangle for a configured time, and stops when the pointer moves out of
//! that rectangle or leaves the surface. Text editors use this to show
//! tooltips, diagnostics, or symbol information for the text under the pointer.
//!
//! ## Overview
//!
//! - [`HoverSettings`]: tolerance (`width`, `height`) and dwell `duration`.
//! - [`HoverState`]: the state machine. Feed it pointer moves, pointer leaves,
//!   and fired timer tokens; it returns [`HoverEvent::Started`] or
//!   [`HoverEvent::Stopped`] transitions.
//! - [`HoverDetector`]: a [`HoverState`] bound to a [`PointerSurface`], owning
//!   the move/leave subscriptions and detaching exactly once.
//!
//! ## Host integration
//!
//! The crate does not assume any particular UI framework. Hosts provide:
//!
//! - a [`PointerSurface`] to register move/leave interest on;
//! - a [`HoverTimer`] implementing single-shot deferred callbacks. When a timer
//!   fires, the host passes the token back to [`HoverState::on_timer`] on the
//!   thread that owns the surface.
//!
//! Cancellation is synchronous: once the detector stops a timer, a late
//! delivery of that token is ignored.
//!
//! ## Events are not consumed
//!
//! Handlers only observe pointer input. They never mark events handled, so a
//! host should keep dispatching the same move or leave to its other observers.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`HoverSettings`].
//! - `tracing`: emit `tracing` events on transitions.
//!
//! This crate is `no_std` compatible and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod detector;
mod host;
mod settings;
mod state;

pub use detector::HoverDetector;
pub use host::{
    AttachError, HoverTimer, PointerChannel, PointerSurface, TimerPriority, TimerRequest,
};
pub use settings::HoverSettings;
pub use state::{HoverEvent, HoverState};
