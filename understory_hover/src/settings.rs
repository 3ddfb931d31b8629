// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tolerance and dwell-time configuration.

use core::time::Duration;

use kurbo::Vec2;

/// Tolerance and dwell time used to decide when the pointer is hovering.
///
/// The pointer is considered to rest while it stays within `width` horizontally
/// and `height` vertically of the position where the current dwell began.
/// Once it has rested for `duration`, hovering starts.
///
/// Units are whatever the host uses for pointer positions (usually logical
/// pixels of the attached surface).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverSettings {
    /// Maximum horizontal movement that still counts as resting.
    pub width: f64,
    /// Maximum vertical movement that still counts as resting.
    pub height: f64,
    /// How long the pointer must rest before hovering starts.
    pub duration: Duration,
}

impl HoverSettings {
    /// Default horizontal and vertical tolerance, in surface units.
    pub const DEFAULT_TOLERANCE: f64 = 4.0;

    /// Default dwell time.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);

    /// Creates settings from an explicit tolerance and dwell time.
    #[must_use]
    pub const fn new(width: f64, height: f64, duration: Duration) -> Self {
        Self {
            width,
            height,
            duration,
        }
    }

    /// Returns `true` if a movement of `delta` leaves the tolerance rectangle.
    ///
    /// Movement exactly on the boundary still counts as resting.
    #[must_use]
    pub fn exceeds(&self, delta: Vec2) -> bool {
        delta.x.abs() > self.width || delta.y.abs() > self.height
    }
}

impl Default for HoverSettings {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_TOLERANCE,
            Self::DEFAULT_TOLERANCE,
            Self::DEFAULT_DURATION,
        )
    }
}
