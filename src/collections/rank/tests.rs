#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

const SAMPLE: [i32; 7] = [10, 20, 8, 15, 4, 21, 20];
const SORTED: [i32; 7] = [4, 8, 10, 15, 20, 20, 21];

fn tree_of(values: &[i32]) -> RankTree<i32> {
    let tree = values.iter().copied().collect::<RankTree<_>>();
    tree.verify_links();
    tree
}

#[test]
fn test_insert_and_get() {
    let tree = tree_of(&SAMPLE);
    assert_eq!(tree.len(), 7);

    for (rank, expected) in SORTED.iter().enumerate() {
        assert_eq!(tree.get(rank as isize), expected, "Value at rank {rank}.");
    }
}

#[test]
fn test_to_vec() {
    assert_eq!(tree_of(&SAMPLE).to_vec(), SORTED);
    assert_eq!(
        tree_of(&[21, 20, 15, 10, 8, 4]).to_vec(),
        [4, 8, 10, 15, 20, 21],
        "A tree that degenerated into a chain of left children should still be sorted."
    );
    assert_eq!(
        tree_of(&SORTED).to_vec(),
        SORTED,
        "A tree that degenerated into a chain of right children should still be sorted."
    );
    assert_eq!(RankTree::<i32>::new().to_vec(), Vec::<i32>::new());
}

#[test]
fn test_negative_ranks() {
    let tree = tree_of(&[10, 20, 8, 15]);
    assert_eq!(*tree.get(-1), 20);
    assert_eq!(*tree.get(-2), 15);
    assert_eq!(*tree.get(-3), 10);
    assert_eq!(*tree.get(-4), 8);
    assert_eq!(tree.get(-1), tree.get(tree.len() as isize - 1));
    assert_eq!(tree.get(-(tree.len() as isize)), tree.get(0));
}

#[test]
fn test_rank_out_of_bounds() {
    let tree = tree_of(&[10, 20, 8, 15]);
    assert_eq!(
        tree.try_get(-5),
        Err(RankError::RankOutOfBounds(RankOutOfBounds { rank: -5, len: 4 }))
    );
    assert_eq!(
        tree.try_get(20),
        Err(RankError::RankOutOfBounds(RankOutOfBounds { rank: 20, len: 4 }))
    );
    assert_panics!({
        tree.get(4);
    });
    assert_panics!({
        tree.get(-5);
    });
}

#[test]
fn test_empty_access() {
    let mut tree = RankTree::<i32>::new();
    assert!(tree.try_get(0).is_err_and(|e| e.is_empty_collection()));
    assert!(tree.try_get(-1).is_err_and(|e| e.is_empty_collection()));
    assert!(tree.try_remove(0).is_err_and(|e| e.is_empty_collection()));

    assert_panics!({
        RankTree::<i32>::new().get(0);
    });
    assert_panics!({
        RankTree::<i32>::new().remove(0);
    });
}

#[test]
fn test_remove_two_children() {
    let mut tree = tree_of(&SAMPLE);
    assert_eq!(tree.remove(2), 10, "The root should be removed by promoting its successor.");
    tree.verify_links();
    assert_eq!(tree.to_vec(), [4, 8, 15, 20, 20, 21]);
    assert_eq!(tree.len(), 6);

    let mut tree = tree_of(&[10, 5, 15]);
    assert_eq!(tree.remove(1), 10, "The successor may be the direct right child.");
    tree.verify_links();
    assert_eq!(tree.to_vec(), [5, 15]);

    tree.insert(12);
    tree.verify_links();
    assert_eq!(tree.to_vec(), [5, 12, 15]);
}

#[test]
fn test_remove_single_child() {
    let mut tree = tree_of(&SORTED);
    assert_eq!(tree.remove(2), 10, "A node with only a right child should be spliced out.");
    tree.verify_links();
    assert_eq!(tree.to_vec(), [4, 8, 15, 20, 20, 21]);

    let mut tree = tree_of(&[21, 20, 15, 10, 8, 4]);
    assert_eq!(tree.remove(3), 15, "A node with only a left child should be spliced out.");
    tree.verify_links();
    assert_eq!(tree.to_vec(), [4, 8, 10, 20, 21]);
}

#[test]
fn test_remove_leaf() {
    let mut tree = tree_of(&SORTED);
    assert_eq!(tree.remove(6), 21);
    tree.verify_links();
    assert_eq!(tree.to_vec(), [4, 8, 10, 15, 20, 20]);
}

#[test]
fn test_remove_root() {
    let mut tree = tree_of(&[5]);
    assert_eq!(tree.remove(0), 5);
    assert!(tree.is_empty());
    tree.verify_links();

    tree.insert(3);
    assert_eq!(*tree.get(0), 3, "The tree should be usable after its last node was removed.");

    let mut tree = tree_of(&[1, 2, 3]);
    assert_eq!(tree.remove(0), 1, "A root with one child should hand the root over to it.");
    tree.verify_links();
    assert_eq!(tree.to_vec(), [2, 3]);
    assert_eq!(*tree.get(0), 2);
}

#[test]
fn test_remove_relocates_nodes() {
    // Removing the 5 moves the last allocated node (the 3) into its slot.
    let mut tree = tree_of(&[10, 5, 15, 3]);
    assert_eq!(tree.remove(1), 5);
    tree.verify_links();
    assert_eq!(tree.to_vec(), [3, 10, 15]);

    tree.extend([4, 1]);
    tree.verify_links();
    assert_eq!(tree.to_vec(), [1, 3, 4, 10, 15]);
}

#[test]
fn test_remove_every_rank() {
    for rank in 0..SORTED.len() {
        let mut tree = tree_of(&SAMPLE);
        let expected = *tree.get(rank as isize);
        assert_eq!(tree.remove(rank), expected, "Removing rank {rank}.");
        tree.verify_links();

        let mut remaining = SORTED.to_vec();
        remaining.remove(rank);
        assert_eq!(tree.to_vec(), remaining, "Contents after removing rank {rank}.");
    }

    let mut tree = tree_of(&SAMPLE);
    let drained: Vec<_> = (0..SAMPLE.len()).map(|_| tree.remove(0)).collect();
    assert_eq!(drained, SORTED, "Repeatedly removing the first rank should drain in order.");
    assert!(tree.is_empty());
}

#[test]
fn test_remove_out_of_bounds() {
    let mut tree = tree_of(&SAMPLE);
    assert_eq!(
        tree.try_remove(7),
        Err(RankError::RankOutOfBounds(RankOutOfBounds { rank: 7, len: 7 }))
    );
    assert_eq!(tree.len(), 7, "A failed removal shouldn't change the length.");
    assert_panics!({
        tree.remove(7);
    });
}

#[test]
fn test_for_each() {
    let tree = tree_of(&[237, 30, 10, 430, 1, 147, 128, 12]);
    let mut visited = String::new();
    tree.for_each(|rank, value| {
        if rank > 6 {
            return false;
        }
        visited.push_str(&format!("{rank}:{value}|"));
        true
    });
    assert_eq!(visited, "0:1|1:10|2:12|3:30|4:128|5:147|6:237|");

    let mut called = false;
    RankTree::<i32>::new().for_each(|_, _| {
        called = true;
        true
    });
    assert!(!called, "An empty tree shouldn't invoke the callback.");
}

#[test]
fn test_unique_values() {
    let mut tree = tree_of(&[2, 1, 3]);
    assert_eq!(tree.to_vec(), [1, 2, 3]);
    assert!(tree.insert(1));

    tree.set_unique_values(true);
    assert!(tree.has_unique_values());
    assert!(!tree.insert(2), "Duplicates should be rejected in unique mode.");
    assert!(!tree.insert(3));
    assert_eq!(
        tree.to_vec(),
        [1, 1, 2, 3],
        "Duplicates inserted before unique mode should be kept."
    );

    let mut tree = RankTree::unique();
    assert_eq!(tree.insert_all([3, 1, 3, 2, 1]), 3);
    assert_eq!(tree.to_vec(), [1, 2, 3]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_iterators() {
    let tree = tree_of(&SAMPLE);
    assert_eq!(tree.iter().len(), 7);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), SORTED);

    let owned = tree.clone().into_iter();
    assert_eq!(owned.len(), 7);
    assert_eq!(owned.rev().collect::<Vec<_>>(), [21, 20, 20, 15, 10, 8, 4]);

    let mut tree = tree;
    tree.remove(0);
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), [8, 10, 15, 20, 20, 21]);
}

#[test]
fn test_equality_and_debug() {
    let a = tree_of(&[1, 2, 3]);
    let b = tree_of(&[2, 3, 1]);
    assert_eq!(a, b, "Equality should not depend on the shape of the tree.");
    assert_ne!(a, tree_of(&[1, 2]));

    assert_eq!(format!("{a:?}"), "RankTree { contents: [1, 2, 3], len: 3, unique: false }");
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    score: u32,
    name: &'static str,
}

#[test]
fn test_custom_ordering() {
    let mut tree = RankTree::new();
    tree.extend([
        Entry { score: 30, name: "c" },
        Entry { score: 10, name: "a" },
        Entry { score: 20, name: "b" },
    ]);
    assert_eq!(tree.get(0).name, "a");
    assert_eq!(tree.get(-1).name, "c");
    assert_eq!(tree.remove(1).name, "b");
    assert_eq!(tree.len(), 2);
}
