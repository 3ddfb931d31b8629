// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.
//!
//! [`SimHost`] stands in for a UI toolkit: it owns a virtual clock, hands out
//! single-shot timers, and records pointer subscriptions.

use std::time::Duration;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use understory_hover::{HoverTimer, PointerChannel, PointerSurface, TimerPriority, TimerRequest};

/// Installs a compact `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A demo may be run after another subscriber was installed; keep the first.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init();
}

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    token: u64,
    due: Duration,
    priority: TimerPriority,
}

/// A virtual-time host with one pointer surface.
#[derive(Debug, Default)]
pub struct SimHost {
    now: Duration,
    next_token: u64,
    timers: Vec<PendingTimer>,
    next_subscription: u64,
    subscriptions: Vec<(u64, PointerChannel)>,
}

impl SimHost {
    /// Creates a host at time zero with no timers or subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Advances virtual time by `by`, returning the tokens of timers that
    /// became due, ordered by due time then priority.
    pub fn advance(&mut self, by: Duration) -> Vec<u64> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<PendingTimer> = Vec::new();
        self.timers.retain(|t| {
            if t.due <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.due, std::cmp::Reverse(t.priority)));
        due.into_iter().map(|t| t.token).collect()
    }

    /// Number of timers that have not fired or been stopped.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Channels currently subscribed on the surface.
    pub fn subscribed(&self) -> Vec<PointerChannel> {
        self.subscriptions.iter().map(|(_, c)| *c).collect()
    }
}

impl HoverTimer for SimHost {
    type Token = u64;

    fn start(&mut self, request: TimerRequest) -> u64 {
        self.next_token += 1;
        self.timers.push(PendingTimer {
            token: self.next_token,
            due: self.now + request.delay,
            priority: request.priority,
        });
        self.next_token
    }

    fn stop(&mut self, token: u64) {
        self.timers.retain(|t| t.token != token);
    }
}

impl PointerSurface for SimHost {
    type Subscription = u64;

    fn subscribe(&mut self, channel: PointerChannel) -> u64 {
        self.next_subscription += 1;
        self.subscriptions.push((self.next_subscription, channel));
        self.next_subscription
    }

    fn unsubscribe(&mut self, subscription: u64) {
        self.subscriptions.retain(|(id, _)| *id != subscription);
    }
}
