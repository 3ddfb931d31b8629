// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reentrance guard basics.
//!
//! A tiny document model whose change notification re-triggers itself. The
//! guard lets the first notification run and refuses the recursive one.
//!
//! Run:
//! - `cargo run -p understory_demos --example reentrance_basics`

use std::cell::RefCell;

use understory_demos::init_tracing;
use understory_reentrance::{depth, enter_ref, guarded};

struct Document {
    text: RefCell<String>,
    log: RefCell<Vec<String>>,
}

impl Document {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
        self.changed();
    }

    /// Normalizing the text writes it back, which notifies again.
    fn changed(&self) {
        let guard = enter_ref(self);
        if !guard.is_entered() {
            self.log
                .borrow_mut()
                .push(format!("skipped nested notification at depth {}", depth()));
            return;
        }
        let normalized = self.text.borrow().trim().to_owned();
        self.log
            .borrow_mut()
            .push(format!("normalizing {normalized:?}"));
        self.set_text(&normalized);
    }
}

fn main() {
    init_tracing("info");

    let doc = Document {
        text: RefCell::new(String::new()),
        log: RefCell::new(Vec::new()),
    };
    doc.set_text("  hello  ");

    for line in doc.log.borrow().iter() {
        println!("{line}");
    }
    println!("final text: {:?}", doc.text.borrow());

    let answer = guarded(&doc, || guarded(&doc, || 42));
    println!("outer ran: {}, inner ran: {}", answer.is_some(), answer.flatten().is_some());
}
