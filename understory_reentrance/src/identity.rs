// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::any::TypeId;
use core::fmt;

/// Identity of an object: its address together with its type.
///
/// Two identities taken with [`Identity::of`] are equal only if they refer to
/// the same address *as the same type*. A struct and its first field share an
/// address but not a type, so they are distinct identities. Identities built
/// with [`Identity::from_raw`] carry no type and only match other raw keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    addr: usize,
    ty: Option<TypeId>,
}

impl Identity {
    /// Identity of the value behind `value`.
    ///
    /// For unsized values only the data address is used; the metadata
    /// (slice length, vtable) is ignored. The type is the static type `T`, so
    /// viewing the same value through a `dyn Trait` yields a different identity
    /// than viewing it through its concrete type.
    #[must_use]
    pub fn of<T: ?Sized + 'static>(value: &T) -> Self {
        Self {
            addr: core::ptr::from_ref(value).cast::<()>() as usize,
            ty: Some(TypeId::of::<T>()),
        }
    }

    /// Identity from an explicit key, for callers that track identity
    /// themselves (for example node ids).
    #[must_use]
    pub const fn from_raw(key: usize) -> Self {
        Self { addr: key, ty: None }
    }

    /// The raw key or address.
    #[must_use]
    pub const fn to_raw(self) -> usize {
        self.addr
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Some(ty) => write!(f, "Identity({:#x}, {ty:?})", self.addr),
            None => write!(f, "Identity({:#x})", self.addr),
        }
    }
}

impl<T: ?Sized + 'static> From<&T> for Identity {
    fn from(value: &T) -> Self {
        Self::of(value)
    }
}
