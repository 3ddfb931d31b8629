// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests for `understory_hover` driven by a virtual clock.
//!
//! The host here delivers timer firings only when virtual time is advanced,
//! which mirrors a UI loop processing background work between input events.

use std::time::Duration;

use kurbo::Point;
use understory_hover::{
    HoverDetector, HoverEvent, HoverSettings, HoverTimer, PointerChannel, PointerSurface,
    TimerRequest,
};

#[derive(Default)]
struct Clock {
    now: Duration,
    next: u64,
    timers: Vec<(u64, Duration)>,
}

impl Clock {
    /// Advances virtual time, returning tokens of timers that became due.
    fn advance(&mut self, by: Duration) -> Vec<u64> {
        self.now += by;
        let now = self.now;
        let (due, rest): (Vec<_>, Vec<_>) = self.timers.drain(..).partition(|(_, at)| *at <= now);
        self.timers = rest;
        due.into_iter().map(|(t, _)| t).collect()
    }
}

impl HoverTimer for Clock {
    type Token = u64;

    fn start(&mut self, request: TimerRequest) -> u64 {
        self.next += 1;
        self.timers.push((self.next, self.now + request.delay));
        self.next
    }

    fn stop(&mut self, token: u64) {
        self.timers.retain(|(t, _)| *t != token);
    }
}

#[derive(Default)]
struct Surface {
    channels: Vec<PointerChannel>,
}

impl PointerSurface for Surface {
    type Subscription = PointerChannel;

    fn subscribe(&mut self, channel: PointerChannel) -> PointerChannel {
        self.channels.push(channel);
        channel
    }

    fn unsubscribe(&mut self, channel: PointerChannel) {
        self.channels.retain(|c| *c != channel);
    }
}

type Detector = HoverDetector<Surface, u32, u64>;

const MS: Duration = Duration::from_millis(1);

fn settings() -> HoverSettings {
    HoverSettings::new(4.0, 4.0, Duration::from_millis(400))
}

fn fire(d: &mut Detector, clock: &mut Clock, by: Duration) -> Vec<HoverEvent<u32>> {
    let due = clock.advance(by);
    due.into_iter()
        .filter_map(|t| d.on_timer(t, &mut *clock))
        .collect()
}

#[test]
fn jitter_within_tolerance_hovers_after_dwell() {
    let mut surface = Surface::default();
    let mut clock = Clock::default();
    let mut d = Detector::attach(Some(&mut surface), settings()).unwrap();

    assert_eq!(d.on_pointer_move(Point::new(100.0, 100.0), 0, &mut clock), None);
    for (i, dx) in [1.0, -2.0, 3.5, -4.0, 0.5].into_iter().enumerate() {
        assert!(fire(&mut d, &mut clock, 50 * MS).is_empty());
        let p = Point::new(100.0 + dx, 100.0 - dx);
        assert_eq!(d.on_pointer_move(p, i as u32 + 1, &mut clock), None);
    }
    // 250ms elapsed so far.
    assert!(fire(&mut d, &mut clock, 149 * MS).is_empty());
    assert_eq!(fire(&mut d, &mut clock, MS), [HoverEvent::Started(0)]);
    assert!(d.is_hovering());
}

#[test]
fn steady_movement_never_hovers() {
    let mut surface = Surface::default();
    let mut clock = Clock::default();
    let mut d = Detector::attach(Some(&mut surface), settings()).unwrap();

    for i in 0..50_u32 {
        let p = Point::new(f64::from(i) * 10.0, 0.0);
        assert_eq!(d.on_pointer_move(p, i, &mut clock), None);
        assert!(fire(&mut d, &mut clock, 100 * MS).is_empty());
    }
    assert!(!d.is_hovering());
    assert_eq!(clock.timers.len(), 1);
}

#[test]
fn moving_away_emits_one_stop_before_rearming() {
    let mut surface = Surface::default();
    let mut clock = Clock::default();
    let mut d = Detector::attach(Some(&mut surface), settings()).unwrap();

    d.on_pointer_move(Point::new(10.0, 10.0), 1, &mut clock);
    assert_eq!(fire(&mut d, &mut clock, 400 * MS), [HoverEvent::Started(1)]);

    assert_eq!(
        d.on_pointer_move(Point::new(10.0, 30.0), 2, &mut clock),
        Some(HoverEvent::Stopped(1))
    );
    assert_eq!(clock.timers.len(), 1);
    // Further small moves at the new spot do not stop again.
    assert_eq!(d.on_pointer_move(Point::new(11.0, 31.0), 3, &mut clock), None);

    assert_eq!(fire(&mut d, &mut clock, 400 * MS), [HoverEvent::Started(2)]);
}

#[test]
fn leave_emits_stop_only_while_hovering() {
    let mut surface = Surface::default();
    let mut clock = Clock::default();
    let mut d = Detector::attach(Some(&mut surface), settings()).unwrap();

    assert_eq!(d.on_pointer_leave(&mut clock), None);

    d.on_pointer_move(Point::new(0.0, 0.0), 1, &mut clock);
    assert_eq!(d.on_pointer_leave(&mut clock), None);
    assert!(clock.timers.is_empty());
    assert!(fire(&mut d, &mut clock, Duration::from_secs(1)).is_empty());

    d.on_pointer_move(Point::new(50.0, 50.0), 2, &mut clock);
    fire(&mut d, &mut clock, 400 * MS);
    assert_eq!(d.on_pointer_leave(&mut clock), Some(HoverEvent::Stopped(2)));
    assert_eq!(d.on_pointer_leave(&mut clock), None);
}

#[test]
fn detach_unsubscribes_from_surface() {
    let mut surface = Surface::default();
    let mut clock = Clock::default();
    let mut d = Detector::attach(Some(&mut surface), settings()).unwrap();
    assert_eq!(surface.channels.len(), 2);

    d.on_pointer_move(Point::new(0.0, 0.0), 1, &mut clock);
    assert!(d.detach(&mut surface));
    assert!(surface.channels.is_empty());
    assert!(fire(&mut d, &mut clock, Duration::from_secs(1)).is_empty());
    assert!(!d.detach(&mut surface));
}
