//! Lock wrappers for sharing collections between threads.
//!
//! None of the collections in this crate lock internally. [`Locked`] holds a collection behind a
//! read-write lock for the length of a single closure, so readers share access and writers get it
//! exclusively. [`ConcurrentMap`] applies the same pattern to a [`HashMap`](std::collections::HashMap).

mod concurrent_map;
mod locked;

pub use concurrent_map::*;
pub use locked::*;
