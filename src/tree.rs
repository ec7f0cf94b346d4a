//! An unbalanced BST over unique `i64` values with an on-demand rebuild.
//! Children are exclusively-owned `Box`es so the tree topology is acyclic by
//! construction and detaching a subtree during deletion is a plain move.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::from_values([1, 7, 4, 23, 8, 9, 4]);
//!
//! // Duplicates are dropped during construction and the tree comes out
//! // height-balanced.
//! assert_eq!(tree.inorder(), [1, 4, 7, 8, 9, 23]);
//! assert!(tree.is_balanced());
//!
//! // A run of ascending inserts skews it to the right...
//! tree.insert(300);
//! tree.insert(400);
//! tree.insert(500);
//! assert!(!tree.is_balanced());
//!
//! // ...and an explicit rebalance rebuilds it at minimal height.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder(), [1, 4, 7, 8, 9, 23, 300, 400, 500]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

type Link = Option<Box<Node>>;

/// A Binary Search Tree of unique `i64` values. This can be used for
/// inserting, finding, and removing values, querying heights and depths,
/// and traversing in level, in-, pre-, or post-order.
///
/// The tree is *not* self-balancing: [`Tree::from_values`] produces a
/// minimal-height tree, arbitrary `insert`/`remove` sequences may degrade it
/// toward a linked list, and [`Tree::rebalance`] restores minimal height on
/// demand.
#[derive(Clone, Debug)]
pub struct Tree {
    root: Link,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// A `Node` has a value that is used for searching/sorting and up to two
/// children. [`Tree::find`] hands out shared references to nodes so callers
/// can inspect the match and the subtree hanging off it.
#[derive(Clone, Debug)]
pub struct Node {
    value: i64,
    left: Link,
    right: Link,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree from the given values. The input is
    /// deduplicated and sorted first; the builder then picks the midpoint of
    /// each remaining sorted run as the subtree root and recurses on the two
    /// halves. For `n` unique values the resulting height is at most
    /// `ceil(log2(n + 1))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values([3, 1, 2, 3, 1]);
    /// assert_eq!(tree.inorder(), [1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    ///
    /// let empty = Tree::from_values([]);
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut sorted: Vec<i64> = values.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self {
            root: build_balanced(&sorted),
        }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree. Inserting a value that is
    /// already present is a silent no-op, so the tree never holds duplicates.
    ///
    /// The new value always becomes a leaf; no rebalancing happens, so a
    /// sorted run of inserts grows one long spine.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.inorder(), [1, 2]);
    /// ```
    pub fn insert(&mut self, value: i64) {
        insert_at(&mut self.root, value);
    }

    /// Removes the given value from the tree. Removing a value that is not
    /// present is a silent no-op.
    ///
    /// A node with two children is not detached directly: its value is
    /// overwritten with its in-order successor (the leftmost value of its
    /// right subtree) and the successor's old node is removed from the right
    /// subtree instead, which by construction has at most one child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::from_values([5, 3, 8]);
    /// tree.remove(5);
    ///
    /// assert_eq!(tree.inorder(), [3, 8]);
    /// assert_eq!(tree.depth(8), Some(0)); // the successor took over the root
    /// ```
    pub fn remove(&mut self, value: i64) {
        remove_at(&mut self.root, value);
    }

    /// Potentially finds the node holding the given value. If no node has the
    /// value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(3).map(|node| node.value()), Some(3));
    /// assert!(tree.find(42).is_none());
    /// ```
    pub fn find(&self, value: i64) -> Option<&Node> {
        self.root.as_deref().and_then(|node| node.find(value))
    }

    /// Returns `true` if the given value is in the tree.
    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Counts the edges from the root to the node holding the given value,
    /// descending by comparison. Returns `None` if the value is not in the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(2), Some(0));
    /// assert_eq!(tree.depth(1), Some(1));
    /// assert_eq!(tree.depth(42), None);
    /// ```
    pub fn depth(&self, value: i64) -> Option<usize> {
        let mut edges = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(edges),
                Ordering::Greater => current = node.right.as_deref(),
            }
            edges += 1;
        }
        None
    }

    /// Gets the height of this tree: the number of levels on the longest
    /// root-to-leaf path. An empty tree has height 0 and a lone leaf has
    /// height 1.
    pub fn height(&self) -> usize {
        height_at(self.root.as_deref())
    }

    /// Collects the values in breadth-first order: the root first, then each
    /// level left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(1..=7);
    /// assert_eq!(tree.level_order(), [4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn level_order(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.level_order_with(|value| values.push(value));
        values
    }

    /// Calls `visit` once per value in breadth-first order. See
    /// [`Tree::level_order`] for the order contract.
    pub fn level_order_with(&self, mut visit: impl FnMut(i64)) {
        let mut queue: VecDeque<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }

    /// Collects the values in order: left subtree, node, right subtree. By
    /// the BST invariants this is the values in ascending order with no
    /// duplicates, which is exactly what [`Tree::rebalance`] rebuilds from.
    pub fn inorder(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.inorder_with(|value| values.push(value));
        values
    }

    /// Calls `visit` once per value in ascending order.
    pub fn inorder_with(&self, mut visit: impl FnMut(i64)) {
        inorder_at(self.root.as_deref(), &mut visit);
    }

    /// Collects the values in pre-order: node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.preorder_with(|value| values.push(value));
        values
    }

    /// Calls `visit` once per value in pre-order.
    pub fn preorder_with(&self, mut visit: impl FnMut(i64)) {
        preorder_at(self.root.as_deref(), &mut visit);
    }

    /// Collects the values in post-order: left subtree, right subtree, node.
    pub fn postorder(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.postorder_with(|value| values.push(value));
        values
    }

    /// Calls `visit` once per value in post-order.
    pub fn postorder_with(&self, mut visit: impl FnMut(i64)) {
        postorder_at(self.root.as_deref(), &mut visit);
    }

    /// Returns `true` if, for every node, the heights of its left and right
    /// subtrees differ by at most 1. An empty tree is balanced.
    ///
    /// This runs as a single bottom-up pass: each subtree reports its height
    /// upward, and the first imbalance found anywhere collapses the whole
    /// pass without computing further heights.
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root.as_deref()).is_some()
    }

    /// Rebuilds the tree at minimal height. The in-order traversal already
    /// yields the value set sorted and deduplicated, so it is fed straight
    /// back into the midpoint-split builder used by [`Tree::from_values`];
    /// the old topology is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 1..=7 {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.inorder(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        let values = self.inorder();
        self.root = build_balanced(&values);
    }

    /// Renders the tree as indented ASCII art for diagnostics. The right
    /// subtree is printed above its parent and the left subtree below, with
    /// guide lines connecting them. An empty tree renders as the empty
    /// string. Equivalent to the [`fmt::Display`] impl.
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }
}

impl Drop for Tree {
    // Dropping the boxes recursively would recurse to tree depth, which for a
    // badly skewed tree can blow the stack. Walk the nodes with an explicit
    // stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl FromIterator<i64> for Tree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => render(root, "", true, f),
            None => Ok(()),
        }
    }
}

impl Node {
    fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// This node's left child, holding the smaller values, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// This node's right child, holding the larger values, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn find(&self, value: i64) -> Option<&Self> {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_deref().and_then(|node| node.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.as_deref().and_then(|node| node.find(value)),
        }
    }

    /// The smallest value in the subtree rooted at this node: descend
    /// leftmost until there is no left child.
    fn smallest(&self) -> i64 {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current.value
    }
}

/// Builds a minimal-height subtree from a sorted, deduplicated slice by
/// rooting it at the midpoint and recursing on the two halves.
fn build_balanced(sorted: &[i64]) -> Link {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    Some(Box::new(Node {
        value: sorted[mid],
        left: build_balanced(&sorted[..mid]),
        right: build_balanced(&sorted[mid + 1..]),
    }))
}

fn insert_at(link: &mut Link, value: i64) {
    match link {
        None => *link = Some(Box::new(Node::new(value))),
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_at(&mut node.left, value),
            Ordering::Equal => {}
            Ordering::Greater => insert_at(&mut node.right, value),
        },
    }
}

fn remove_at(link: &mut Link, value: i64) {
    let node = match link {
        Some(node) => node,
        None => return,
    };
    match value.cmp(&node.value) {
        Ordering::Less => remove_at(&mut node.left, value),
        Ordering::Greater => remove_at(&mut node.right, value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => *link = None,
            (Some(child), None) | (None, Some(child)) => *link = Some(child),
            (Some(left), Some(right)) => {
                // Two children: overwrite with the in-order successor and
                // remove the successor's old node from the right subtree.
                let successor = right.smallest();
                node.value = successor;
                node.left = Some(left);
                node.right = Some(right);
                remove_at(&mut node.right, successor);
            }
        },
    }
}

fn height_at(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(node) => height_at(node.left.as_deref()).max(height_at(node.right.as_deref())) + 1,
    }
}

/// Returns the height of the subtree, or `None` if any node below it has
/// child heights differing by more than 1. The `None` propagates straight up
/// so no further heights are computed once an imbalance is found.
fn balanced_height(node: Option<&Node>) -> Option<usize> {
    let node = match node {
        Some(node) => node,
        None => return Some(0),
    };
    let left = balanced_height(node.left.as_deref())?;
    let right = balanced_height(node.right.as_deref())?;
    if left.max(right) - left.min(right) > 1 {
        None
    } else {
        Some(left.max(right) + 1)
    }
}

fn inorder_at(node: Option<&Node>, visit: &mut impl FnMut(i64)) {
    if let Some(node) = node {
        inorder_at(node.left.as_deref(), visit);
        visit(node.value);
        inorder_at(node.right.as_deref(), visit);
    }
}

fn preorder_at(node: Option<&Node>, visit: &mut impl FnMut(i64)) {
    if let Some(node) = node {
        visit(node.value);
        preorder_at(node.left.as_deref(), visit);
        preorder_at(node.right.as_deref(), visit);
    }
}

fn postorder_at(node: Option<&Node>, visit: &mut impl FnMut(i64)) {
    if let Some(node) = node {
        postorder_at(node.left.as_deref(), visit);
        postorder_at(node.right.as_deref(), visit);
        visit(node.value);
    }
}

/// Writes one line per node. The right subtree goes above its parent (so the
/// output reads like the tree rotated 90° counterclockwise) and guide lines
/// bridge the gap between a parent and its connector.
fn render(node: &Node, prefix: &str, is_left: bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(right) = node.right.as_deref() {
        let pad = if is_left { "│   " } else { "    " };
        render(right, &format!("{}{}", prefix, pad), false, f)?;
    }
    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, connector, node.value)?;
    if let Some(left) = node.left.as_deref() {
        let pad = if is_left { "    " } else { "│   " };
        render(left, &format!("{}{}", prefix, pad), true, f)?;
    }
    Ok(())
}
