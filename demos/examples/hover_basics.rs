// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover dwell detection basics.
//!
//! Replays a scripted pointer path over a simulated host and prints the hover
//! transitions. Settings may be supplied as JSON in the first argument, e.g.
//! `{"width":2.0,"height":2.0,"duration":{"secs":0,"nanos":250000000}}`.
//!
//! Run:
//! - `cargo run -p understory_demos --example hover_basics`
//! - `RUST_LOG=trace cargo run -p understory_demos --example hover_basics`

use std::time::Duration;

use kurbo::Point;
use understory_demos::{SimHost, init_tracing};
use understory_hover::{HoverDetector, HoverEvent, HoverSettings};

/// What the host delivers at each step of the script.
#[derive(Clone, Copy, Debug)]
enum Input {
    Move(f64, f64),
    Wait(u64),
    Leave,
}

/// Pointer events carry the step index so transitions can be traced back.
type Detector = HoverDetector<SimHost, usize, u64>;

fn main() {
    init_tracing("info");

    let settings = match std::env::args().nth(1) {
        Some(json) => match serde_json::from_str::<HoverSettings>(&json) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::error!(%err, "invalid settings, using defaults");
                HoverSettings::default()
            }
        },
        None => HoverSettings::default(),
    };
    println!(
        "settings: {}",
        serde_json::to_string(&settings).unwrap_or_default()
    );

    let mut host = SimHost::new();
    let mut hover = match Detector::attach(Some(&mut host), settings) {
        Ok(hover) => hover,
        Err(err) => {
            tracing::error!(%err, "attach failed");
            return;
        }
    };

    let script = [
        Input::Move(10.0, 10.0),
        Input::Wait(100),
        Input::Move(12.0, 11.0),
        Input::Wait(350),
        Input::Move(13.0, 9.0),
        Input::Move(40.0, 10.0),
        Input::Wait(500),
        Input::Leave,
        Input::Move(80.0, 30.0),
        Input::Wait(200),
        Input::Move(120.0, 30.0),
        Input::Wait(600),
    ];

    for (step, input) in script.into_iter().enumerate() {
        let mut transitions = Vec::new();
        match input {
            Input::Move(x, y) => {
                transitions.extend(hover.on_pointer_move(Point::new(x, y), step, &mut host));
            }
            Input::Leave => transitions.extend(hover.on_pointer_leave(&mut host)),
            Input::Wait(ms) => {
                for token in host.advance(Duration::from_millis(ms)) {
                    transitions.extend(hover.on_timer(token, &mut host));
                }
            }
        }
        for transition in transitions {
            let label = match transition {
                HoverEvent::Started(_) => "started",
                HoverEvent::Stopped(_) => "stopped",
            };
            println!(
                "t={:>5}ms step {step:>2} {input:?}: hover {label} (from step {})",
                host.now().as_millis(),
                transition.event(),
            );
        }
    }

    // The simulated host is both surface and timer service, so end the hover
    // first and then drop the subscriptions.
    if let Some(last) = hover.on_pointer_leave(&mut host) {
        println!("detached while hovering (from step {})", last.event());
    }
    hover.detach(&mut host);
    println!("subscriptions left: {:?}", host.subscribed());
}
