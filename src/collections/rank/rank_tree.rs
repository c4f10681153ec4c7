use std::fmt::{self, Debug, Formatter};

use tracing::trace;

use super::{Arena, InOrder, Iter, NodeId};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, RankError, RankOutOfBounds};
use crate::util::result::ResultExtension;

/// An unbalanced binary search tree which keeps its values sorted and addresses them by rank, their
/// 0-based position in ascending order.
///
/// Equal values are allowed unless the tree is in unique mode (see [`RankTree::unique`]). Values
/// comparing less than or equal to a node descend to its left, so an equal value is always
/// inserted below the existing ones.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RankTree.
/// - `h`: The height of the tree, `log2 n` for random insertion order but up to `n` when values
///   arrive sorted.
/// - `r`: The rank in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `get` | `O(h + r)` |
/// | `remove` | `O(h + r)` |
/// | `to_vec` | `O(n)` |
///
/// Nothing is ever rebalanced, so this is best suited to small collections or unsorted input.
#[derive(Clone)]
pub struct RankTree<T: Ord> {
    pub(crate) arena: Arena<T>,
    pub(crate) unique: bool,
}

impl<T: Ord> RankTree<T> {
    /// Creates a new, empty RankTree which accepts duplicate values.
    pub const fn new() -> RankTree<T> {
        RankTree {
            arena: Arena::new(),
            unique: false,
        }
    }

    /// Creates a new, empty RankTree which rejects values equal to one it already holds.
    pub const fn unique() -> RankTree<T> {
        RankTree {
            arena: Arena::new(),
            unique: true,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn has_unique_values(&self) -> bool {
        self.unique
    }

    /// Switches unique mode on or off. This only affects later insertions; duplicates already in
    /// the tree are kept.
    pub const fn set_unique_values(&mut self, unique: bool) {
        self.unique = unique;
    }

    /// Inserts `value`, returning false if it was rejected because the tree is in unique mode and
    /// already holds an equal value.
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut curr) = self.arena.root else {
            self.arena.root = Some(self.arena.alloc(value, None));
            return true;
        };

        loop {
            let node = &self.arena[curr];
            let ordering = value.cmp(&node.value);
            if self.unique && ordering.is_eq() {
                return false;
            }

            let next = if ordering.is_le() { node.left } else { node.right };
            match next {
                Some(next) => curr = next,
                None => {
                    let leaf = self.arena.alloc(value, Some(curr));
                    let parent = &mut self.arena[curr];
                    if ordering.is_le() {
                        parent.left = Some(leaf);
                    } else {
                        parent.right = Some(leaf);
                    }
                    return true;
                },
            }
        }
    }

    /// Inserts every value from `values` in order, returning how many were accepted.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        let mut accepted = 0;
        for value in values {
            if self.insert(value) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Returns a reference to the value at `rank`, panicking on a failure. Negative ranks count
    /// back from the largest value, so `-1` is the last one.
    ///
    /// # Panics
    /// Panics if the RankTree is empty or `rank` is outside of `-len..len`.
    pub fn get(&self, rank: isize) -> &T {
        self.try_get(rank).throw()
    }

    /// Returns a reference to the value at `rank`, returning an [`Err`] on a failure rather than
    /// panicking. Negative ranks count back from the largest value.
    pub fn try_get(&self, rank: isize) -> Result<&T, RankError> {
        Ok(&self.arena[self.checked_seek(rank)?].value)
    }

    /// Removes and returns the value at `rank`, panicking on a failure. Unlike
    /// [`get`](RankTree::get), negative ranks aren't supported.
    ///
    /// # Panics
    /// Panics if the RankTree is empty or `rank` is out of bounds.
    pub fn remove(&mut self, rank: usize) -> T {
        self.try_remove(rank).throw()
    }

    /// Removes and returns the value at `rank`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, rank: usize) -> Result<T, RankError> {
        let len = self.len();
        if len == 0 {
            return Err(EmptyCollection.into());
        }
        let id = self.seek(rank).ok_or(RankOutOfBounds {
            rank: isize::try_from(rank).unwrap_or(isize::MAX),
            len,
        })?;

        let node = &self.arena[id];
        let (parent, left, right) = (node.parent, node.left, node.right);

        let value = match (left, right) {
            (None, None) => {
                trace!(rank, "removing leaf");
                self.arena.relink(parent, id, None);
                self.arena.release(id)
            },
            (None, Some(child)) | (Some(child), None) => {
                trace!(rank, "removing node with a single child");
                self.arena.relink(parent, id, Some(child));
                self.arena[child].parent = parent;
                self.arena.release(id)
            },
            (Some(_), Some(right)) => {
                trace!(rank, "removing node with two children, promoting its successor");
                // The node stays where it is and takes its successor's value, while the successor
                // is spliced out. Having no left child, its right child takes its place.
                let successor = self.arena.leftmost(right);
                let node = &self.arena[successor];
                let (succ_parent, succ_right) = (node.parent, node.right);

                self.arena.relink(succ_parent, successor, succ_right);
                if let Some(succ_right) = succ_right {
                    self.arena[succ_right].parent = succ_parent;
                }
                self.arena.swap_values(id, successor);
                self.arena.release(successor)
            },
        };

        Ok(value)
    }

    /// Calls `f` with the rank and value of each element, in ascending order, until `f` returns
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

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the values in ascending order. An empty tree produces an empty [`Vec`].
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Ord> RankTree<T> {
    /// Finds the node at a non-negative `rank` by walking the tree in order.
    pub(crate) fn seek(&self, rank: usize) -> Option<NodeId> {
        InOrder::new(&self.arena).nth(rank)
    }

    pub(crate) fn checked_seek(&self, rank: isize) -> Result<NodeId, RankError> {
        let len = self.len();
        if len == 0 {
            return Err(EmptyCollection.into());
        }

        let position = if rank < 0 {
            len.checked_sub(rank.unsigned_abs())
        } else {
            Some(rank.unsigned_abs())
        };

        position
            .and_then(|position| self.seek(position))
            .ok_or(RankOutOfBounds { rank, len }.into())
    }

    /// Checks that every child links back to its parent, the root has no parent and that every
    /// node in the arena is reachable from the root.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.arena.root {
            None => assert_eq!(self.len(), 0),
            Some(root) => {
                assert_eq!(self.arena[root].parent, None);
                let mut reached = 0;
                let mut pending = vec![root];
                while let Some(id) = pending.pop() {
                    reached += 1;
                    let node = &self.arena[id];
                    for child in [node.left, node.right].into_iter().flatten() {
                        assert_eq!(self.arena[child].parent, Some(id));
                        pending.push(child);
                    }
                }
                assert_eq!(reached, self.len());
            },
        }
    }
}

impl<T: Ord> Default for RankTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for RankTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: Ord> FromIterator<T> for RankTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RankTree::new();
        tree.insert_all(iter);
        tree
    }
}

impl<T: Ord> PartialEq for RankTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for RankTree<T> {}

impl<T: Ord + Debug> Debug for RankTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankTree")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .field("unique", &self.unique)
            .finish()
    }
}

struct DebugContents<'a, T: Ord>(&'a RankTree<T>);

impl<T: Ord + Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
