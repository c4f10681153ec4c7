use std::iter::FusedIterator;

use super::RingBuffer;

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buffer: self,
            front: 0,
            back: self.len(),
        }
    }
}

/// A borrowed iterator over a [`RingBuffer`], from the oldest element to the newest.
pub struct Iter<'a, T> {
    pub(crate) buffer: &'a RingBuffer<T>,
    // Logical offsets, front inclusive and back exclusive.
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.buffer.live(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buffer.live(self.back))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}
