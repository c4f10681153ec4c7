//! Support collections shared by backend services: containers with small, precise contracts that
//! the standard library doesn't offer out of the box.
//!
//! # Contents
//! - [`RingBuffer`](collections::circ::RingBuffer): a fixed capacity buffer which overwrites its
//!   oldest element once full, with predicate-driven eviction from the oldest end and a persisted
//!   form which restores it exactly.
//! - [`RankTree`](collections::rank::RankTree): an unbalanced binary search tree addressed by
//!   rank, with negative ranks counting back from the largest value.
//! - [`Locked`](collections::sync::Locked) and [`ConcurrentMap`](collections::sync::ConcurrentMap):
//!   read-write lock wrappers for sharing collections between threads, since nothing here locks
//!   internally.
//!
//! # Error Handling
//! Out of range or empty accesses are precondition violations, so the plain methods panic. Every
//! such method has a `try_` counterpart which returns a [`Result`] instead, for callers which can't
//! guarantee their bounds up front.
//!
//! Errors are strongly typed: structs (often ZSTs) implementing [`Error`](std::error::Error), and
//! enums of them for static dispatch where a method can fail in more than one way.
//!
//! # Features
//! Each collection family sits behind a Cargo feature (`circ`, `rank`, `sync`), all of which are
//! enabled by `collections-all`. The `serde` feature adds serialization for
//! [`RingBuffer`](collections::circ::RingBuffer). Both `collections-all` and `serde` are on by
//! default.
//!
//! # Logging
//! Overwrites, evictions and structural removals are reported through [`tracing`] at `trace` and
//! `debug` level. No subscriber is installed by this crate.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
