// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration traits: pointer subscriptions and single-shot timers.
//!
//! The hover detector does not own an event loop. Hosts implement
//! [`PointerSurface`] for whatever delivers pointer notifications and
//! [`HoverTimer`] for their deferred-callback primitive, then forward the
//! resulting notifications to the detector.

use core::fmt;
use core::time::Duration;

/// A pointer notification channel a detector listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerChannel {
    /// The pointer moved over the surface.
    Move,
    /// The pointer left the surface.
    Leave,
}

/// Something that can deliver pointer notifications to subscribers.
///
/// A subscription only records the interest; the host is still responsible
/// for calling the detector's handlers for the channels it subscribed to.
pub trait PointerSurface {
    /// Handle returned by [`subscribe`](Self::subscribe) and consumed by
    /// [`unsubscribe`](Self::unsubscribe).
    type Subscription;

    /// Registers interest in `channel` notifications.
    fn subscribe(&mut self, channel: PointerChannel) -> Self::Subscription;

    /// Removes a registration made by [`subscribe`](Self::subscribe).
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}

/// Scheduling priority for a deferred callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerPriority {
    /// Run after pending input and rendering work.
    #[default]
    Background,
    /// Run alongside ordinary input work.
    Normal,
}

/// Parameters for a single-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    /// Delay before the timer fires.
    pub delay: Duration,
    /// Host scheduling priority.
    pub priority: TimerPriority,
}

impl TimerRequest {
    /// A background-priority request for `delay`.
    #[must_use]
    pub const fn background(delay: Duration) -> Self {
        Self {
            delay,
            priority: TimerPriority::Background,
        }
    }
}

/// A host-provided single-shot timer service.
///
/// When a started timer fires, the host must hand its token back to
/// [`HoverState::on_timer`](crate::HoverState::on_timer) on the same thread
/// that delivers pointer notifications for the surface.
pub trait HoverTimer {
    /// Identifies one started timer.
    type Token: Copy + Eq + fmt::Debug;

    /// Starts a single-shot timer.
    fn start(&mut self, request: TimerRequest) -> Self::Token;

    /// Cancels a timer started by [`start`](Self::start).
    ///
    /// Stopping a timer that already fired must be harmless.
    fn stop(&mut self, token: Self::Token);
}

/// Error returned by [`HoverDetector::attach`](crate::HoverDetector::attach).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachError {
    /// No surface was supplied.
    MissingSurface,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSurface => f.write_str("cannot attach hover detection without a surface"),
        }
    }
}

impl core::error::Error for AttachError {}
