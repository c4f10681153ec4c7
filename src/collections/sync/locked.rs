use std::fmt::{self, Debug, Formatter};

use parking_lot::RwLock;

/// A collection guarded by a [`RwLock`]. The lock is only held while a closure passed to
/// [`read`](Locked::read) or [`write`](Locked::write) runs, which keeps each logical operation
/// atomic without handing out guards.
///
/// Wrap it in an [`Arc`](std::sync::Arc) to share it between threads.
pub struct Locked<C> {
    inner: RwLock<C>,
}

impl<C> Locked<C> {
    pub fn new(collection: C) -> Locked<C> {
        Locked {
            inner: RwLock::new(collection),
        }
    }

    /// Runs `f` with shared access to the collection.
    pub fn read<R, F: FnOnce(&C) -> R>(&self, f: F) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the collection.
    pub fn write<R, F: FnOnce(&mut C) -> R>(&self, f: F) -> R {
        f(&mut self.inner.write())
    }

    /// Returns the collection, bypassing the lock as `&mut self` already guarantees exclusivity.
    pub fn get_mut(&mut self) -> &mut C {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<C: Default> Default for Locked<C> {
    fn default() -> Self {
        Locked::new(C::default())
    }
}

impl<C> From<C> for Locked<C> {
    fn from(collection: C) -> Self {
        Locked::new(collection)
    }
}

impl<C: Debug> Debug for Locked<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.read(|collection| f.debug_tuple("Locked").field(collection).finish())
    }
}
