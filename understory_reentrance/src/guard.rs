// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

use crate::identity::Identity;

thread_local! {
    static ACTIVE: RefCell<Vec<Identity>> = const { RefCell::new(Vec::new()) };
}

/// Handle returned by [`enter`] and [`enter_ref`].
///
/// An entered guard owns one entry on the calling thread's active stack and
/// releases it on drop. A failed guard ([`ReentranceGuard::FAILED`]) owns
/// nothing and releases nothing.
///
/// Guards from [`enter_ref`] borrow the value they were entered for, so the
/// value cannot be dropped (and its address reused) while the entry is live.
#[must_use = "the identity is released as soon as the guard is dropped"]
pub struct ReentranceGuard<'a> {
    entry: Option<Identity>,
    // Borrows the entered value; the entry lives on the entering thread's stack.
    _marker: PhantomData<(&'a (), *const ())>,
}

impl ReentranceGuard<'_> {
    /// The sentinel returned when the identity is already active.
    pub const FAILED: Self = Self {
        entry: None,
        _marker: PhantomData,
    };

    /// Returns `true` if entry succeeded and the guarded work should run.
    pub fn is_entered(&self) -> bool {
        self.entry.is_some()
    }

    /// The identity this guard holds, if entered.
    pub fn identity(&self) -> Option<Identity> {
        self.entry
    }
}

impl fmt::Debug for ReentranceGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReentranceGuard")
            .field("entry", &self.entry)
            .finish_non_exhaustive()
    }
}

impl Drop for ReentranceGuard<'_> {
    fn drop(&mut self) {
        let Some(identity) = self.entry.take() else {
            return;
        };
        // The thread-local may already be gone during thread teardown.
        let _ = ACTIVE.try_with(|active| {
            let mut active = active.borrow_mut();
            match active.iter().rposition(|id| *id == identity) {
                Some(top) if top + 1 == active.len() => {
                    active.pop();
                }
                Some(index) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        ?identity,
                        depth = active.len(),
                        "reentrance guard released out of order"
                    );
                    active.remove(index);
                }
                None => {}
            }
        });
    }
}

/// Tries to mark `identity` active on the calling thread.
///
/// Returns [`ReentranceGuard::FAILED`] if it is already active on this thread.
/// The caller keeps whatever `identity` stands for alive while the guard is
/// held; prefer [`enter_ref`] when there is a value to borrow.
pub fn enter(identity: Identity) -> ReentranceGuard<'static> {
    acquire(identity)
}

fn acquire<'a>(identity: Identity) -> ReentranceGuard<'a> {
    ACTIVE.with(|active| {
        let mut active = active.borrow_mut();
        if active.contains(&identity) {
            return ReentranceGuard::FAILED;
        }
        active.push(identity);
        ReentranceGuard {
            entry: Some(identity),
            _marker: PhantomData,
        }
    })
}

/// [`enter`] with the identity of `value`.
///
/// The guard borrows `value`, so the value outlives its entry:
///
/// ```compile_fail
/// use understory_reentrance::enter_ref;
///
/// let guard = {
///     let value = Box::new(1_u32);
///     enter_ref(&*value)
/// };
/// drop(guard);
/// ```
pub fn enter_ref<'a, T: ?Sized + 'static>(value: &'a T) -> ReentranceGuard<'a> {
    acquire(Identity::of(value))
}

/// Runs `f` unless `value` is already active on this thread.
///
/// Returns `None` without calling `f` on reentry.
pub fn guarded<T: ?Sized + 'static, R>(value: &T, f: impl FnOnce() -> R) -> Option<R> {
    let guard = enter_ref(value);
    if !guard.is_entered() {
        return None;
    }
    let out = f();
    drop(guard);
    Some(out)
}

/// Returns `true` if `identity` is active on the calling thread.
pub fn is_active(identity: Identity) -> bool {
    ACTIVE.with(|active| active.borrow().contains(&identity))
}

/// Number of identities active on the calling thread.
pub fn depth() -> usize {
    ACTIVE.with(|active| active.borrow().len())
}
