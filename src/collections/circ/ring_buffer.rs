use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::ops::Index;

use tracing::{debug, trace};

use super::Iter;
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds, ZeroCapacity};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A fixed capacity buffer which can be appended to indefinitely, overwriting the oldest element
/// once every slot is in use. Elements can also be evicted in bulk from the oldest end, based on a
/// predicate, which suits values carrying some notion of age (timestamps, sequence numbers).
///
/// Logical positions run from the oldest element (`0`) to the newest (`len - 1`).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingBuffer.
/// - `k`: The number of items evicted by a call.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head/last` | `O(1)` |
/// | `get` | `O(1)` |
/// | `append` | `O(1)` |
/// | `prepend` | `O(n)` |
/// | `shift_while` | `O(k)` |
/// | `clear` | `O(1)` |
///
/// The write cursor and free slot count fully describe the layout of the backing slots: the free
/// slots are always the `free` slots starting at the cursor, so the oldest element lives at
/// `(cursor + free) % capacity` and the newest at `(cursor - 1) % capacity`.
pub struct RingBuffer<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) cursor: usize,
    pub(crate) free: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a new, empty RingBuffer able to hold `capacity` elements.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> RingBuffer<T> {
        Self::try_new(capacity).throw()
    }

    /// Creates a new, empty RingBuffer able to hold `capacity` elements, returning an [`Err`] if
    /// `capacity` is zero rather than panicking.
    pub fn try_new(capacity: usize) -> Result<RingBuffer<T>, ZeroCapacity> {
        if capacity == 0 {
            return Err(ZeroCapacity);
        }

        Ok(RingBuffer {
            slots: iter::repeat_with(|| None).take(capacity).collect(),
            cursor: 0,
            free: capacity,
        })
    }

    /// Returns the number of elements the RingBuffer can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements currently held.
    pub fn len(&self) -> usize {
        self.capacity() - self.free
    }

    pub fn is_empty(&self) -> bool {
        self.free == self.capacity()
    }

    /// Returns true if the next [`append`](RingBuffer::append) will overwrite the oldest element.
    pub fn is_full(&self) -> bool {
        self.free == 0
    }

    /// Adds `value` after the newest element. If the RingBuffer is full, the oldest element is
    /// overwritten and the length doesn't change.
    pub fn append(&mut self, value: T) {
        if self.is_full() {
            trace!(slot = self.cursor, "ring buffer full, append overwrites the oldest element");
        } else {
            self.free -= 1;
        }
        self.slots[self.cursor] = Some(value);
        self.cursor = (self.cursor + 1) % self.capacity();
    }

    /// Adds `value` before the oldest element.
    ///
    /// If the RingBuffer is full, nothing can be shifted out of the way, so the slot just before
    /// the write cursor is overwritten instead. That slot holds the newest element, which `value`
    /// replaces as the newest; the oldest element is kept.
    pub fn prepend(&mut self, value: T) {
        if self.is_full() {
            let slot = self.slot(self.len() - 1);
            trace!(slot, "ring buffer full, prepend overwrites the newest element");
            self.slots[slot] = Some(value);
            return;
        }

        let oldest = self.slot(0);
        let cap = self.capacity();
        // Walk backwards from the first free slot, moving each element one slot towards the
        // cursor. The oldest element's slot is left for the new value.
        let mut dst = self.cursor;
        while dst != oldest {
            let src = (dst + cap - 1) % cap;
            self.slots[dst] = self.slots[src].take();
            dst = src;
        }
        self.slots[oldest] = Some(value);
        self.cursor = (self.cursor + 1) % cap;
        self.free -= 1;
    }

    /// Returns a reference to the oldest element, panicking if there are none.
    ///
    /// # Panics
    /// Panics if the RingBuffer is empty.
    pub fn head(&self) -> &T {
        self.try_head().throw()
    }

    /// Returns a reference to the oldest element, returning an [`Err`] if there are none.
    pub fn try_head(&self) -> Result<&T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        Ok(self.live(0))
    }

    /// Returns a reference to the newest element, panicking if there are none.
    ///
    /// # Panics
    /// Panics if the RingBuffer is empty.
    pub fn last(&self) -> &T {
        self.try_last().throw()
    }

    /// Returns a reference to the newest element, returning an [`Err`] if there are none.
    pub fn try_last(&self) -> Result<&T, EmptyCollection> {
        match self.len().checked_sub(1) {
            Some(last) => Ok(self.live(last)),
            None => Err(EmptyCollection),
        }
    }

    /// Returns a reference to the element at logical position `index`, where `0` is the oldest.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RingBuffer.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at logical position `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        Ok(self.live(index))
    }

    /// Evicts elements from the oldest end for as long as `predicate` holds for the current oldest
    /// element, stopping at the first element it rejects or once the RingBuffer is empty. Returns
    /// the number of evicted elements.
    ///
    /// Evicted slots are only marked as free, their contents are overwritten by later appends.
    pub fn shift_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut evicted = 0;
        while !self.is_empty() && predicate(self.live(0)) {
            self.free += 1;
            evicted += 1;
        }
        if evicted > 0 {
            debug!(evicted, remaining = self.len(), "shifted elements off ring buffer");
        }
        evicted
    }

    /// Calls `f` with the rank and value of each element, from oldest to newest, until `f` returns
    /// false.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (rank, value) in self.iter().enumerate() {
            if !f(rank, value) {
                break;
            }
        }
    }

    /// Marks every slot as free. Nothing is dropped until it gets overwritten.
    pub fn clear(&mut self) {
        self.free = self.capacity();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> RingBuffer<T> {
    /// Maps a logical offset from the oldest element to a physical slot.
    pub(crate) fn slot(&self, offset: usize) -> usize {
        (self.cursor + self.free + offset) % self.capacity()
    }

    /// Returns the element at logical position `offset`, which must be less than the length.
    pub(crate) fn live(&self, offset: usize) -> &T {
        self.slots[self.slot(offset)].as_ref().occupied()
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        RingBuffer {
            slots: self.slots.clone(),
            cursor: self.cursor,
            free: self.free,
        }
    }
}

/// Two RingBuffers are equal if they hold equal elements in the same logical order, regardless of
/// capacity or physical layout.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T: Debug> Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

struct DebugContents<'a, T>(&'a RingBuffer<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
