use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RingBuffer;

/// The persisted form of a [`RingBuffer`]: every backing slot (free ones included), the write
/// cursor and the number of free slots. Restoring from it reproduces both the logical order and
/// which elements later appends will overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingState<T> {
    pub slots: Vec<Option<T>>,
    pub cursor: usize,
    pub free: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRingState {
    pub reason: &'static str,
}

impl Display for InvalidRingState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid RingBuffer state: {}!", self.reason)
    }
}

impl Error for InvalidRingState {}

impl<T: Clone> RingBuffer<T> {
    pub fn to_state(&self) -> RingState<T> {
        RingState {
            slots: self.slots.to_vec(),
            cursor: self.cursor,
            free: self.free,
        }
    }
}

impl<T> RingBuffer<T> {
    pub fn into_state(self) -> RingState<T> {
        RingState {
            slots: self.slots.into_vec(),
            cursor: self.cursor,
            free: self.free,
        }
    }
}

impl<T> TryFrom<RingState<T>> for RingBuffer<T> {
    type Error = InvalidRingState;

    fn try_from(state: RingState<T>) -> Result<Self, Self::Error> {
        let RingState { slots, cursor, free } = state;
        let cap = slots.len();

        if cap == 0 {
            return Err(InvalidRingState { reason: "no backing slots" });
        }
        if cursor >= cap {
            return Err(InvalidRingState { reason: "write cursor past the last slot" });
        }
        if free > cap {
            return Err(InvalidRingState { reason: "more free slots than backing slots" });
        }

        let buffer = RingBuffer {
            slots: slots.into_boxed_slice(),
            cursor,
            free,
        };
        if (0..buffer.len()).any(|offset| buffer.slots[buffer.slot(offset)].is_none()) {
            return Err(InvalidRingState { reason: "live slot without a value" });
        }
        Ok(buffer)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct RingStateRef<'a, T> {
    slots: &'a [Option<T>],
    cursor: usize,
    free: usize,
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RingStateRef {
            slots: &self.slots,
            cursor: self.cursor,
            free: self.free,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingBuffer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = RingState::<T>::deserialize(deserializer)?;
        RingBuffer::try_from(state).map_err(serde::de::Error::custom)
    }
}
