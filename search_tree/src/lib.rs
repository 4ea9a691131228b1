mod link;
mod traversal;

use link::Link;
use slab::Slab;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    left: Option<usize>,
    right: Option<usize>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree. Nodes live in a slab and point at each
/// other by slab key.
#[derive(Debug, Clone)]
pub struct SearchTree<K> {
    nodes: Slab<Node<K>>,
    root: Option<usize>,
}

impl<K: Ord> SearchTree<K> {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut link = Link::Root;
        while let Some(node) = self.target(link) {
            link = match key.cmp(&self.nodes[node].key) {
                Ordering::Less => Link::Left(node),
                Ordering::Greater => Link::Right(node),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Adds `key`, replacing the stored key if an equal one is present.
    pub fn insert(&mut self, key: K) {
        let mut link = Link::Root;
        while let Some(node) = self.target(link) {
            link = match key.cmp(&self.nodes[node].key) {
                Ordering::Less => Link::Left(node),
                Ordering::Greater => Link::Right(node),
                Ordering::Equal => {
                    self.nodes[node].key = key;
                    return;
                }
            };
        }
        let node = self.nodes.insert(Node::leaf(key));
        self.retarget(link, Some(node));
    }

    /// Removes `key`, returning whether it was present. A node with a left
    /// subtree takes over its in-order predecessor's key; otherwise its right
    /// subtree takes its place.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_below(Link::Root, key)
    }

    /// Removes and returns the largest key.
    pub fn remove_max(&mut self) -> Option<K> {
        self.remove_max_below(Link::Root)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn remove_below(&mut self, link: Link, key: &K) -> bool {
        let Some(node) = self.target(link) else {
            return false;
        };
        match key.cmp(&self.nodes[node].key) {
            Ordering::Less => self.remove_below(Link::Left(node), key),
            Ordering::Greater => self.remove_below(Link::Right(node), key),
            Ordering::Equal => {
                match self.remove_max_below(Link::Left(node)) {
                    Some(predecessor) => self.nodes[node].key = predecessor,
                    None => {
                        let right = self.nodes[node].right;
                        self.retarget(link, right);
                        self.nodes.remove(node);
                    }
                }
                true
            }
        }
    }

    fn remove_max_below(&mut self, link: Link) -> Option<K> {
        let node = self.target(link)?;
        if self.nodes[node].right.is_some() {
            return self.remove_max_below(Link::Right(node));
        }
        let left = self.nodes[node].left;
        self.retarget(link, left);
        Some(self.nodes.remove(node).key)
    }
}

impl<K: Ord> Default for SearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn tree_of(keys: &[i32]) -> SearchTree<i32> {
        let mut tree = SearchTree::new();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn insert_keeps_sorted_order() {
        let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert!(tree.contains(&60));
        assert!(!tree.contains(&65));
    }

    #[test]
    fn duplicate_insert_overwrites() {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Keyed(u8, &'static str);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut tree = SearchTree::new();
        tree.insert(Keyed(1, "old"));
        tree.insert(Keyed(2, "two"));
        tree.insert(Keyed(1, "new"));
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.in_order(), vec![Keyed(1, "new"), Keyed(2, "two")]);
    }

    #[test]
    fn remove_missing_key() {
        let mut tree = tree_of(&[5, 3]);
        assert!(!tree.remove(&4));
        assert!(!SearchTree::<i32>::new().remove(&4));
        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn remove_leaf_and_single_child() {
        let mut tree = tree_of(&[50, 30, 70, 80]);
        assert!(tree.remove(&80));
        assert!(tree.remove(&70));
        assert_eq!(tree.in_order(), vec![30, 50]);
    }

    #[test]
    fn remove_internal_node_uses_predecessor() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 35]);
        assert!(tree.remove(&50));
        // 40 is the largest key left of the root
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 40);
        assert_eq!(tree.in_order(), vec![20, 30, 35, 40, 70]);
        assert_eq!(tree.size(), 5);
    }

    #[test]
    fn remove_root_without_left_subtree() {
        let mut tree = tree_of(&[10, 20, 15]);
        assert!(tree.remove(&10));
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 20);
        assert_eq!(tree.in_order(), vec![15, 20]);
    }

    #[test]
    fn remove_max_walks_right_spine() {
        let mut tree = tree_of(&[5, 9, 7, 8]);
        assert_eq!(tree.remove_max(), Some(9));
        assert_eq!(tree.remove_max(), Some(8));
        assert_eq!(tree.in_order(), vec![5, 7]);
        tree.clear();
        assert_eq!(tree.remove_max(), None);
    }

    #[test]
    fn clear_then_reuse() {
        let mut tree = tree_of(&[3, 1, 2]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        tree.insert(9);
        assert_eq!(tree.in_order(), vec![9]);
    }

    #[test]
    fn random_inserts_and_removes_match_btree_set() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut tree = SearchTree::new();
        let mut expected = BTreeSet::new();
        let mut keys: Vec<i32> = (0..200).collect();
        keys.shuffle(&mut rng);
        for &key in &keys {
            tree.insert(key);
            expected.insert(key);
        }
        for _ in 0..400 {
            let key = rng.gen_range(0..250);
            if rng.gen_bool(0.5) {
                assert_eq!(tree.remove(&key), expected.remove(&key));
            } else {
                tree.insert(key);
                expected.insert(key);
            }
            assert_eq!(tree.size(), expected.len());
        }
        assert_eq!(tree.in_order(), expected.into_iter().collect::<Vec<_>>());
    }
}
