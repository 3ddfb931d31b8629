// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Reentrance: thread-local guards against recursive re-entry.
//!
//! UI code is full of feedback loops: a layout pass invalidates a measurement
//! that triggers layout, a change notification updates a property that raises
//! the same notification. A plain `busy: bool` flag stops the loop but is shared
//! across threads. This crate keeps one stack of active [`Identity`] values per
//! thread instead, so the same object can be processed concurrently on
//! different threads while recursion on one thread is refused.
//!
//! ## Usage
//!
//! ```rust
//! use understory_reentrance::enter_ref;
//!
//! struct Document {
//!     text: String,
//! }
//!
//! fn reflow(doc: &Document, depth: &mut u32) {
//!     let guard = enter_ref(doc);
//!     if !guard.is_entered() {
//!         // Already reflowing this document on this thread.
//!         return;
//!     }
//!     *depth += 1;
//!     // Something inside reflow ends up calling back into it.
//!     reflow(doc, depth);
//! }
//!
//! let doc = Document { text: "hello".into() };
//! let mut depth = 0;
//! reflow(&doc, &mut depth);
//! assert_eq!(depth, 1);
//! ```
//!
//! For the common "run this unless already running" case, use [`guarded`]:
//!
//! ```rust
//! use understory_reentrance::guarded;
//!
//! let value = 5_u32;
//! let outer = guarded(&value, || guarded(&value, || "inner"));
//! assert_eq!(outer, Some(None));
//! ```
//!
//! ## Identity
//!
//! Entries are compared by address and type, never by value: two equal
//! strings at different addresses are different identities, and a struct is
//! distinct from its first field even though they share an address.
//! Zero-sized values of the same type may share an address; use
//! [`Identity::from_raw`] with an explicit key when that matters.
//!
//! Guards from [`enter_ref`] borrow the entered value, so an address cannot be
//! freed and reused while its entry is still on the stack.
//!
//! ## Release order
//!
//! Guards release on drop. With ordinary scoped use they release in reverse
//! order of entry and each release pops the top of the stack. A guard that is
//! dropped out of order removes its own entry wherever it sits, so the other
//! entries stay intact. With the `tracing` feature, out-of-order releases are
//! logged as warnings.
//!
//! Guards are `!Send`: the stack they belong to is the entering thread's.
//!
//! ## Features
//!
//! - `tracing`: log out-of-order releases through `tracing`.
//!
//! This crate requires `std` for thread-local storage.

mod guard;
mod identity;

pub use guard::{ReentranceGuard, depth, enter, enter_ref, guarded, is_active};
pub use identity::Identity;
