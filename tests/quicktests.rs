//! Property tests exercising only the public API of the crate.

use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};

use bstree::Tree;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(i64),
    Remove(i64),
    Rebalance,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(i64::from(i8::arbitrary(g))),
            1 => Op::Remove(i64::from(i8::arbitrary(g))),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a tree.
fn do_ops(ops: &[Op], tree: &mut Tree) {
    for op in ops {
        match op {
            Op::Insert(value) => tree.insert(*value),
            Op::Remove(value) => tree.remove(*value),
            Op::Rebalance => tree.rebalance(),
        }
    }
}

/// `ceil(log2(m))` for `m >= 1`.
fn ceil_log2(m: usize) -> u32 {
    usize::BITS - (m - 1).leading_zeros()
}

quickcheck::quickcheck! {
    /// The BST invariant, observed from outside: whatever was done to the
    /// tree, in-order traversal yields a strictly ascending sequence.
    fn inorder_is_strictly_ascending(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree);

        let inorder = tree.inorder();
        inorder.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    /// Construction from arbitrary input is balanced and meets the height
    /// bound for the deduplicated input size.
    fn construction_height_bound(values: Vec<i64>) -> bool {
        let unique: BTreeSet<i64> = values.iter().copied().collect();
        let tree = Tree::from_values(values);

        tree.is_balanced() && tree.height() <= ceil_log2(unique.len() + 1) as usize
    }
}

quickcheck::quickcheck! {
    /// Removing a present value removes exactly that value and nothing else.
    fn remove_removes_exactly_one(values: Vec<i64>, target: i64) -> bool {
        let mut tree = Tree::from_values(values.iter().copied().chain(Some(target)));
        let mut expected = tree.inorder();

        tree.remove(target);
        expected.retain(|value| *value != target);
        tree.inorder() == expected
    }
}

quickcheck::quickcheck! {
    /// Inserting an already-present value changes nothing.
    fn insert_present_value_is_idempotent(values: Vec<i64>, target: i64) -> bool {
        let mut tree = Tree::from_values(values.iter().copied().chain(Some(target)));
        let before = tree.inorder();

        tree.insert(target);
        tree.inorder() == before
    }
}

quickcheck::quickcheck! {
    /// Rebalancing never changes the value set, always restores balance, and
    /// meets the same height bound as construction.
    fn rebalance_round_trips(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree);

        let before = tree.inorder();
        tree.rebalance();

        tree.is_balanced()
            && tree.inorder() == before
            && tree.height() <= ceil_log2(before.len() + 1) as usize
    }
}

quickcheck::quickcheck! {
    /// `depth` and `find` agree on membership, and reported depths never
    /// exceed the height.
    fn depth_and_find_agree(ops: Vec<Op>, probes: Vec<i64>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree);

        let height = tree.height();
        probes.iter().all(|probe| match tree.depth(*probe) {
            Some(edges) => tree.contains(*probe) && edges < height,
            None => !tree.contains(*probe),
        })
    }
}

quickcheck::quickcheck! {
    /// The pretty printer renders one line per value and never panics.
    fn pretty_print_renders_once_per_value(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree);

        tree.pretty_print().lines().count() == tree.inorder().len()
    }
}
