// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface attachment for [`HoverState`].
//!
//! [`HoverDetector`] owns the move/leave subscriptions on a [`PointerSurface`]
//! and forwards notifications to an inner [`HoverState`]. It is bound to one
//! surface for its whole life and detached at most once.
//!
//! ```
//! use kurbo::Point;
//! use understory_hover::{
//!     HoverDetector, HoverEvent, HoverSettings, HoverTimer, PointerChannel, PointerSurface,
//!     TimerRequest,
//! };
//!
//! #[derive(Default)]
//! struct Surface {
//!     listeners: Vec<PointerChannel>,
//! }
//!
//! impl PointerSurface for Surface {
//!     type Subscription = PointerChannel;
//!     fn subscribe(&mut self, channel: PointerChannel) -> PointerChannel {
//!         self.listeners.push(channel);
//!         channel
//!     }
//!     fn unsubscribe(&mut self, channel: PointerChannel) {
//!         self.listeners.retain(|c| *c != channel);
//!     }
//! }
//!
//! struct Timers;
//!
//! impl HoverTimer for Timers {
//!     type Token = ();
//!     fn start(&mut self, _request: TimerRequest) {}
//!     fn stop(&mut self, _token: ()) {}
//! }
//!
//! let mut surface = Surface::default();
//! let mut hover: HoverDetector<Surface, &str, ()> =
//!     HoverDetector::attach(Some(&mut surface), HoverSettings::default()).unwrap();
//! assert_eq!(surface.listeners.len(), 2);
//!
//! hover.on_pointer_move(Point::new(3.0, 4.0), "move", &mut Timers);
//! assert_eq!(hover.on_timer((), &mut Timers), Some(HoverEvent::Started("move")));
//!
//! assert!(hover.detach(&mut surface));
//! assert!(!hover.detach(&mut surface));
//! assert!(surface.listeners.is_empty());
//! ```

use core::fmt;

use kurbo::Point;

use crate::host::{AttachError, HoverTimer, PointerChannel, PointerSurface};
use crate::settings::HoverSettings;
use crate::state::{HoverEvent, HoverState};

struct Subscriptions<S> {
    on_move: S,
    on_leave: S,
}

/// Hover detection attached to one [`PointerSurface`].
///
/// Pointer and timer handlers become no-ops once the detector is detached.
pub struct HoverDetector<S: PointerSurface, E, Tok> {
    state: HoverState<E, Tok>,
    subscriptions: Option<Subscriptions<S::Subscription>>,
}

impl<S, E, Tok> fmt::Debug for HoverDetector<S, E, Tok>
where
    S: PointerSurface,
    E: fmt::Debug,
    Tok: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverDetector")
            .field("state", &self.state)
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}

impl<S: PointerSurface, E, Tok> HoverDetector<S, E, Tok> {
    /// Subscribes to move and leave notifications on `surface`.
    ///
    /// Hosts usually look surfaces up by id, so the surface is taken as an
    /// `Option`; `None` fails with [`AttachError::MissingSurface`].
    pub fn attach(surface: Option<&mut S>, settings: HoverSettings) -> Result<Self, AttachError> {
        let surface = surface.ok_or(AttachError::MissingSurface)?;
        let on_leave = surface.subscribe(PointerChannel::Leave);
        let on_move = surface.subscribe(PointerChannel::Move);
        #[cfg(feature = "tracing")]
        tracing::debug!("hover detector attached");
        Ok(Self {
            state: HoverState::new(settings),
            subscriptions: Some(Subscriptions { on_move, on_leave }),
        })
    }

    /// Removes both subscriptions from `surface`.
    ///
    /// `surface` must be the surface this detector was attached to; the
    /// subscription handles are handed to it without further checks.
    ///
    /// Returns `true` the first time and `false` on every later call. Hover
    /// state is left untouched; see [`detach_with_timer`](Self::detach_with_timer)
    /// to also end an active hover.
    pub fn detach(&mut self, surface: &mut S) -> bool {
        let Some(subs) = self.subscriptions.take() else {
            return false;
        };
        surface.unsubscribe(subs.on_leave);
        surface.unsubscribe(subs.on_move);
        #[cfg(feature = "tracing")]
        tracing::debug!("hover detector detached");
        true
    }

    /// Returns `true` until [`detach`](Self::detach) succeeds.
    pub fn is_attached(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// The underlying state machine.
    pub fn state(&self) -> &HoverState<E, Tok> {
        &self.state
    }

    /// See [`HoverState::is_hovering`].
    pub fn is_hovering(&self) -> bool {
        self.state.is_hovering()
    }

    /// See [`HoverState::has_pending_timer`].
    pub fn has_pending_timer(&self) -> bool {
        self.state.has_pending_timer()
    }

    /// See [`HoverState::settings`].
    pub fn settings(&self) -> &HoverSettings {
        self.state.settings()
    }

    /// See [`HoverState::set_settings`].
    pub fn set_settings(&mut self, settings: HoverSettings) {
        self.state.set_settings(settings);
    }
}

impl<S, E, Tok> HoverDetector<S, E, Tok>
where
    S: PointerSurface,
    E: Clone,
    Tok: Copy + Eq,
{
    /// Forwards a pointer move; see [`HoverState::on_pointer_move`].
    pub fn on_pointer_move<T>(
        &mut self,
        position: Point,
        event: E,
        timer: &mut T,
    ) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        if !self.is_attached() {
            return None;
        }
        self.state.on_pointer_move(position, event, timer)
    }

    /// Forwards a pointer leave; see [`HoverState::on_pointer_leave`].
    pub fn on_pointer_leave<T>(&mut self, timer: &mut T) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        if !self.is_attached() {
            return None;
        }
        self.state.on_pointer_leave(timer)
    }

    /// Forwards a fired timer; see [`HoverState::on_timer`].
    pub fn on_timer<T>(&mut self, token: Tok, timer: &mut T) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        if !self.is_attached() {
            return None;
        }
        self.state.on_timer(token, timer)
    }

    /// Detaches from `surface`, cancelling any pending timer and ending an
    /// active hover.
    ///
    /// As with [`detach`](Self::detach), `surface` must be the one passed to
    /// [`attach`](Self::attach).
    ///
    /// Returns the final [`HoverEvent::Stopped`] if a hover was active. Later
    /// calls do nothing.
    pub fn detach_with_timer<T>(&mut self, surface: &mut S, timer: &mut T) -> Option<HoverEvent<E>>
    where
        T: HoverTimer<Token = Tok>,
    {
        if !self.detach(surface) {
            return None;
        }
        self.state.stop_hovering(timer)
    }
}
