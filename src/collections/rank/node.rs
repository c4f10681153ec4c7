use std::mem;
use std::ops::{Index, IndexMut};

/// The position of a [`Node`] within its [`Arena`]. Only meaningful for the arena that issued it,
/// and only until that arena next releases a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub usize);

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Exclusive owner of every node in a tree, along with the link to its root. Parent and child links
/// are plain ids, none of them own anything.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    pub nodes: Vec<Node<T>>,
    pub root: Option<NodeId>,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Stores a new leaf below `parent`. The caller is responsible for linking it from the parent's
    /// side.
    pub fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            parent,
            left: None,
            right: None,
        });
        id
    }

    /// Returns the leftmost node of the subtree rooted at `id`.
    pub fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// Points whichever link referred to `old` (a child link of `parent`, or the root when `parent`
    /// is None) at `new` instead.
    pub fn relink(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let parent = &mut self[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
            None => self.root = new,
        }
    }

    pub fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(high);
        mem::swap(&mut head[low].value, &mut tail[0].value);
    }

    /// Removes a node that is no longer linked from anywhere in the tree and returns its value.
    ///
    /// The last node in the arena is moved into the hole, so the links pointing at it (from its
    /// parent or the root, and from its children) are updated to the new id.
    pub fn release(&mut self, id: NodeId) -> T {
        let moved_from = NodeId(self.nodes.len() - 1);
        let node = self.nodes.swap_remove(id.0);

        if id != moved_from {
            let moved = &self[id];
            let (parent, left, right) = (moved.parent, moved.left, moved.right);
            self.relink(parent, moved_from, Some(id));
            for child in [left, right].into_iter().flatten() {
                self[child].parent = Some(id);
            }
        }

        node.value
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.0]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, index: NodeId) -> &mut Self::Output {
        &mut self.nodes[index.0]
    }
}
