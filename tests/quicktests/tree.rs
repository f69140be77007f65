use bstree::tree::Tree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and an ordered set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in the set.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                tree.delete(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);

    set.iter().all(|v| tree.get_node(v).is_some()) && tree.count_nodes() == set.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.get_node(x).is_some())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.get_node(x).is_none())
}

#[quickcheck]
fn inorder_is_ascending_sort(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);

    let inorder: Vec<i8> = tree.inorder().iter().copied().collect();
    let sorted: Vec<i8> = set.iter().copied().collect();
    inorder == sorted
}

#[quickcheck]
fn all_traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let distinct: BTreeSet<_> = xs.into_iter().collect();
    [
        tree.preorder(),
        tree.inorder(),
        tree.postorder(),
        tree.level_order(),
    ]
    .iter()
    .all(|order| {
        order.len() == distinct.len() && order.iter().all(|v| distinct.contains(v))
    })
}

#[quickcheck]
fn inorder_cessors_match_sorted_neighbors(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let sorted: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    sorted.iter().enumerate().all(|(i, x)| {
        let predecessor = tree.inorder_predecessor(x).map(|n| *n.value());
        let successor = tree.inorder_successor(x).map(|n| *n.value());

        predecessor == i.checked_sub(1).map(|i| sorted[i])
            && successor == sorted.get(i + 1).copied()
    })
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let count = tree.count_nodes();
    let height = tree.height();

    // A height-h tree holds between h and 2^h - 1 nodes.
    (height == 0) == (count == 0) && height <= count && count < (1usize << height.min(60))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let deletes: BTreeSet<_> = deletes.into_iter().collect();
    let still_present: BTreeSet<_> = xs
        .into_iter()
        .filter(|x| !deletes.contains(x))
        .collect();

    deletes.iter().all(|x| tree.get_node(x).is_none())
        && still_present.iter().all(|x| tree.get_node(x).is_some())
        && tree.count_nodes() == still_present.len()
}

#[quickcheck]
fn parent_of_points_at_a_real_child(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| match tree.parent_of(x) {
        Some(parent) => {
            let left = parent.left().node().map(|n| *n.value());
            let right = parent.right().node().map(|n| *n.value());
            left == Some(*x) || right == Some(*x)
        }
        // Only the root (the first value in preorder) has no parent.
        None => tree.preorder().iter().next() == Some(x),
    })
}
