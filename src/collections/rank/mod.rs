//! A module containing [`RankTree`], a sorted collection addressed by rank, and its iterators.
//!
//! The tree's nodes are held in an arena and refer to each other by index, so parent links don't
//! need any shared ownership.

mod iter;
mod node;
mod rank_tree;
mod tests;

pub(crate) use iter::InOrder;
pub use iter::{IntoIter, Iter};
pub(crate) use node::*;
pub use rank_tree::*;
