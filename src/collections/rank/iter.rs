use std::iter::FusedIterator;

use super::{Arena, NodeId, RankTree};
use crate::util::option::OptionExtension;

/// Walks the ids of an [`Arena`] in ascending order, using an explicit stack in place of recursion:
/// the stack holds the chain of left children still to be visited, and every popped node pushes the
/// leftmost chain of its right subtree.
pub(crate) struct InOrder<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub fn new(arena: &'a Arena<T>) -> InOrder<'a, T> {
        let mut walk = InOrder {
            arena,
            stack: Vec::new(),
            remaining: arena.len(),
        };
        if let Some(root) = arena.root {
            walk.descend(root);
        }
        walk
    }

    fn descend(&mut self, mut id: NodeId) {
        self.stack.push(id);
        while let Some(left) = self.arena[id].left {
            self.stack.push(left);
            id = left;
        }
    }
}

impl<T> Iterator for InOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(right) = self.arena[id].right {
            self.descend(right);
        }
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}

impl<T> FusedIterator for InOrder<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a RankTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            walk: InOrder::new(&self.arena),
        }
    }
}

/// A borrowed iterator over a [`RankTree`], in ascending order.
pub struct Iter<'a, T> {
    pub(crate) walk: InOrder<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.walk.arena;
        self.walk.next().map(|id| &arena[id].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Ord> IntoIterator for RankTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let order: Vec<NodeId> = InOrder::new(&self.arena).collect();
        let mut values: Vec<Option<T>> =
            self.arena.nodes.into_iter().map(|node| Some(node.value)).collect();

        IntoIter {
            inner: order
                .into_iter()
                .map(|id| values[id.0].take().occupied())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

/// An owned iterator over a [`RankTree`], in ascending order.
pub struct IntoIter<T> {
    // Nodes are scattered through the arena in insertion order, so it's simpler to sort them once
    // up front than to unpick the tree lazily.
    pub(crate) inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
