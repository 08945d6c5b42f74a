//! Arena-backed binary search tree keyed by `u32`.
//!
//! Nodes live in a flat `Vec` and refer to their children by index, so the
//! tree owns all of its nodes without reference cycles. Slots freed by
//! [`SearchTree::delete`] are recycled by later inserts.

use crate::common::BoardError;

#[derive(Debug, Clone)]
struct Node<V> {
    key: u32,
    value: V,
    left: Option<usize>,
    right: Option<usize>,
}

/// Unbalanced binary search tree. Balance is the caller's concern: feed keys
/// through [`crate::sequence::balanced_order`] to keep it logarithmic.
#[derive(Debug, Clone)]
pub struct SearchTree<V> {
    nodes: Vec<Node<V>>,
    free: Vec<usize>,
    root: Option<usize>,
    len: usize,
}

impl<V> Default for SearchTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SearchTree<V> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    fn alloc(&mut self, key: u32, value: V) -> usize {
        let node = Node {
            key,
            value,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Insert `key`; duplicate keys are rejected.
    pub fn insert(&mut self, key: u32, value: V) -> Result<(), BoardError> {
        let Some(mut cur) = self.root else {
            let slot = self.alloc(key, value);
            self.root = Some(slot);
            self.len += 1;
            return Ok(());
        };
        loop {
            let node = &self.nodes[cur];
            if key == node.key {
                return Err(BoardError::DuplicateKey(key));
            }
            let next = if key < node.key { node.left } else { node.right };
            match next {
                Some(n) => cur = n,
                None => {
                    let slot = self.alloc(key, value);
                    let parent = &mut self.nodes[cur];
                    if key < parent.key {
                        parent.left = Some(slot);
                    } else {
                        parent.right = Some(slot);
                    }
                    self.len += 1;
                    return Ok(());
                }
            }
        }
    }

    fn find(&self, key: u32) -> Option<usize> {
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i];
            if key == node.key {
                return Some(i);
            }
            cur = if key < node.key { node.left } else { node.right };
        }
        None
    }

    pub fn search(&self, key: u32) -> Option<&V> {
        self.find(key).map(|i| &self.nodes[i].value)
    }

    pub fn search_mut(&mut self, key: u32) -> Option<&mut V> {
        match self.find(key) {
            Some(i) => Some(&mut self.nodes[i].value),
            None => None,
        }
    }

    pub fn contains(&self, key: u32) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key`, returning its value. A node with two children takes
    /// over its in-order successor's entry and the successor is unlinked.
    pub fn delete(&mut self, key: u32) -> Option<V>
    where
        V: Clone,
    {
        let mut parent: Option<usize> = None;
        let mut cur = self.root?;
        while self.nodes[cur].key != key {
            parent = Some(cur);
            let node = &self.nodes[cur];
            cur = if key < node.key { node.left? } else { node.right? };
        }
        let removed = self.nodes[cur].value.clone();

        let (left, right) = (self.nodes[cur].left, self.nodes[cur].right);
        match (left, right) {
            (Some(_), Some(r)) => {
                // Find the successor and its parent within the right subtree.
                let mut succ_parent = cur;
                let mut succ = r;
                while let Some(l) = self.nodes[succ].left {
                    succ_parent = succ;
                    succ = l;
                }
                let succ_right = self.nodes[succ].right;
                if succ_parent == cur {
                    self.nodes[cur].right = succ_right;
                } else {
                    self.nodes[succ_parent].left = succ_right;
                }
                self.nodes[cur].key = self.nodes[succ].key;
                self.nodes[cur].value = self.nodes[succ].value.clone();
                self.free.push(succ);
            }
            _ => {
                let child = left.or(right);
                match parent {
                    None => self.root = child,
                    Some(p) if self.nodes[p].left == Some(cur) => self.nodes[p].left = child,
                    Some(p) => self.nodes[p].right = child,
                }
                self.free.push(cur);
            }
        }
        self.len -= 1;
        Some(removed)
    }

    /// Smallest key and its value.
    pub fn min(&self) -> Option<(u32, &V)> {
        let mut cur = self.root?;
        while let Some(l) = self.nodes[cur].left {
            cur = l;
        }
        Some((self.nodes[cur].key, &self.nodes[cur].value))
    }

    /// Largest key and its value.
    pub fn max(&self) -> Option<(u32, &V)> {
        let mut cur = self.root?;
        while let Some(r) = self.nodes[cur].right {
            cur = r;
        }
        Some((self.nodes[cur].key, &self.nodes[cur].value))
    }

    /// Number of levels; an empty tree has height 0.
    pub fn height(&self) -> usize {
        let Some(root) = self.root else { return 0 };
        let mut max = 0;
        let mut stack = vec![(root, 1usize)];
        while let Some((i, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[i];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    /// Entries in ascending key order (left, node, right).
    pub fn in_order(&self) -> Vec<(u32, &V)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cur = self.root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(i) = cur {
                stack.push(i);
                cur = self.nodes[i].left;
            }
            if let Some(i) = stack.pop() {
                out.push((self.nodes[i].key, &self.nodes[i].value));
                cur = self.nodes[i].right;
            }
        }
        out
    }

    /// Entries in node, left, right order.
    pub fn pre_order(&self) -> Vec<(u32, &V)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            out.push((node.key, &node.value));
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    /// Entries in left, right, node order.
    pub fn post_order(&self) -> Vec<(u32, &V)> {
        // Reverse of a node, right, left walk.
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            out.push((node.key, &node.value));
            stack.extend(node.left);
            stack.extend(node.right);
        }
        out.reverse();
        out
    }
}
