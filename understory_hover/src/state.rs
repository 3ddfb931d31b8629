// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state machine: turn pointer moves, leaves, and timer firings into
//! hover start/stop transitions.
//!
//! ## Usage
//!
//! 1) Forward every pointer move to [`HoverState::on_pointer_move`] with the
//!    position in surface coordinates and the host's event payload.
//! 2) Forward pointer leaves to [`HoverState::on_pointer_leave`].
//! 3) When a timer started through your [`HoverTimer`] fires, pass its token to
//!    [`HoverState::on_timer`].
//! 4) Interpret the returned [`HoverEvent`], if any.
//!
//! None of the handlers consume the input: the host keeps dispatching the
//! pointer event to other observers as usual.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_hover::{HoverEvent, HoverSettings, HoverState, HoverTimer, TimerRequest};
//!
//! #[derive(Default)]
//! struct Timers {
//!     next: u32,
//!     running: Option<u32>,
//! }
//!
//! impl HoverTimer for Timers {
//!     type Token = u32;
//!     fn start(&mut self, _request: TimerRequest) -> u32 {
//!         self.next += 1;
//!         self.running = Some(self.next);
//!         self.next
//!     }
//!     fn stop(&mut self, token: u32) {
//!         if self.running == Some(token) {
//!             self.running = None;
//!         }
//!     }
//! }
//!
//! let mut timers = Timers::default();
//! let mut hover = HoverState::new(HoverSettings::default());
//!
//! // The first move arms the dwell timer.
//! assert_eq!(hover.on_pointer_move(Point::new(10.0, 10.0), "move", &mut timers), None);
//! let token = timers.running.unwrap();
//!
//! // The timer fires while the pointer is still resting.
//! assert_eq!(hover.on_timer(token, &mut timers), Some(HoverEvent::Started("move")));
//!
//! // Leaving the surface ends the hover.
//! assert_eq!(hover.on_pointer_leave(&mut timers), Some(HoverEvent::Stopped("move")));
//! ```

use kurbo::Point;

use crate::host::{HoverTimer, TimerRequest};
use crate::settings::HoverSettings;

/// A hover transition.
///
/// Both variants carry the input event that started the current dwell, i.e.
/// the last pointer move that left the previous tolerance rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverEvent<E> {
    /// The pointer has rested long enough; hovering started.
    Started(E),
    /// A hover that previously started has ended.
    Stopped(E),
}

impl<E> HoverEvent<E> {
    /// The input event carried by this transition.
    pub fn event(&self) -> &E {
        match self {
            Self::Started(e) | Self::Stopped(e) => e,
        }
    }

    /// Consumes the transition and returns its input event.
    pub fn into_event(self) -> E {
        match self {
            Self::Started(e) | Self::Stopped(e) => e,
        }
    }

    /// Returns `true` for [`HoverEvent::Started`].
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Dwell-based hover tracking for a single surface.
///
/// `E` is the host's pointer event payload and `Tok` the token type of the
/// host's [`HoverTimer`]. At most one timer is pending at a time, and a
/// pending timer never coexists with an active hover.
#[derive(Clone, Debug)]
pub struct HoverState<E, Tok> {
    settings: HoverSettings,
    reference: Option<Point>,
    last_event: Option<E>,
    hovering: bool,
    pending: Option<Tok>,
}

impl<E, Tok> Default for HoverState<E, Tok> {
    fn default() -> Self {
        Self::new(HoverSettings::default())
    }
}

impl<E, Tok> HoverState<E, Tok> {
    /// Creates an idle state with the given settings.
    #[must_use]
    pub fn new(settings: HoverSettings) -> Self {
        Self {
            settings,
            reference: None,
            last_event: None,
            hovering: false,
            pending: None,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &HoverSettings {
        &self.settings
    }

    /// Replaces the settings.
    ///
    /// A timer that is already pending keeps its original delay; the new
    /// tolerance applies from the next pointer move.
    pub fn set_settings(&mut self, settings: HoverSettings) {
        self.settings = settings;
    }

    /// Returns `true` between a [`HoverEvent::Started`] and its matching
    /// [`HoverEvent::Stopped`].
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Returns `true` while a dwell timer is pending.
    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Position where the current dwell began, if any move was seen.
    pub fn reference_position(&self) -> Option<Point> {
        self.reference
    }

    /// The input event that started the current dwell.
    pub fn last_event(&self) -> Option<&E> {
        self.last_event.as_ref()
    }
}

impl<E: Clone, Tok: Copy + Eq> HoverState<E, Tok> {
    /// Handles a pointer move to `position`.
    ///
    /// Movement within the tolerance rectangle around the reference position
    /// is ignored. Movement beyond it ends any hover (returning
    /// [`HoverEvent::Stopped`]), restarts the dwell at `position`, and arms a
    /// new timer. The first move ever seen always starts a dwell.
    pub fn on_pointer_move<T>(
        &mut self,
        position: Point,
        event: E,
        timer: &mut T,
    ) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        let moved_out = match self.reference {
            Some(reference) => self.settings.exceeds(reference - position),
            None => true,
        };
        if !moved_out {
            return None;
        }

        let stopped = self.stop_hovering(timer);
        self.reference = Some(position);
        self.last_event = Some(event);
        self.pending = Some(timer.start(TimerRequest::background(self.settings.duration)));
        #[cfg(feature = "tracing")]
        tracing::trace!(x = position.x, y = position.y, "hover dwell armed");
        stopped
    }

    /// Handles the pointer leaving the surface.
    ///
    /// Cancels any pending dwell and returns [`HoverEvent::Stopped`] if a
    /// hover was active.
    pub fn on_pointer_leave<T>(&mut self, timer: &mut T) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        self.stop_hovering(timer)
    }

    /// Handles a fired timer.
    ///
    /// Tokens other than the pending one belong to timers that were already
    /// cancelled and are ignored.
    pub fn on_timer<T>(&mut self, token: Tok, timer: &mut T) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        if self.pending != Some(token) {
            return None;
        }
        self.pending = None;
        // Single-shot, but hosts with repeating timers need the explicit stop.
        timer.stop(token);

        let event = self.last_event.clone()?;
        self.hovering = true;
        #[cfg(feature = "tracing")]
        tracing::trace!("hover started");
        Some(HoverEvent::Started(event))
    }

    /// Cancels the pending timer and ends any active hover.
    ///
    /// The reference position is kept, so a subsequent move within the
    /// tolerance does not arm a new dwell.
    pub fn stop_hovering<T>(&mut self, timer: &mut T) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        if let Some(token) = self.pending.take() {
            timer.stop(token);
        }
        if !self.hovering {
            return None;
        }
        self.hovering = false;
        #[cfg(feature = "tracing")]
        tracing::trace!("hover stopped");
        self.last_event.clone().map(HoverEvent::Stopped)
    }
}
