//! Circular collection types. Currently just [`RingBuffer`], a fixed capacity buffer which
//! overwrites its oldest element once full, and its persisted form, [`RingState`].

mod iter;
mod ring_buffer;
mod state;

pub use iter::*;
pub use ring_buffer::*;
pub use state::*;
