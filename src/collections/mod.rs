//! Various general-purpose collection types.
//!
//! None of these types are internally synchronized. Use the wrappers in [`sync`] (or any other
//! lock) to share them between threads.

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "rank")]
pub mod rank;
#[cfg(feature = "sync")]
pub mod sync;
