use bstree::{sink, BSTree, Order};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

fn keys<K: Clone>(tree: &BSTree<K>, order: Order) -> Vec<K> {
    let mut out = Vec::new();
    tree.traverse(order, &mut out);
    out
}

/// Applies a set of operations to a tree and a `BTreeSet`, forking both whenever asked to. Every
/// fork left behind must keep exactly the keys it had when it was abandoned.
fn do_ops<K>(ops: &[Op<K>]) -> bool
where
    K: Ord + Clone,
{
    let mut bst = BSTree::new();
    let mut set = BTreeSet::new();
    let mut abandoned = Vec::new();

    for op in ops {
        match op {
            Op::Insert(k) => {
                if bst.insert(k.clone()) != set.insert(k.clone()) {
                    return false;
                }
            }
            Op::Fork => {
                let copy = bst.clone();
                abandoned.push((std::mem::replace(&mut bst, copy), set.clone()));
            }
            Op::Clear => {
                bst.clear();
                set.clear();
            }
        }
    }

    abandoned.push((bst, set));
    abandoned.iter().all(|(bst, set)| {
        bst.len() == set.len() && keys(bst, Order::In).iter().eq(set.iter())
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    do_ops(&ops)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BSTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.retrieve(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BSTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.retrieve(x))
}

#[quickcheck]
fn size_counts_distinct_keys(xs: Vec<i16>) -> bool {
    let mut tree = BSTree::new();
    let mut inserted = 0;
    for x in &xs {
        let before = tree.len();
        if tree.insert(*x) {
            inserted += 1;
            if tree.len() != before + 1 {
                return false;
            }
        } else if tree.len() != before {
            return false;
        }
    }

    let distinct: HashSet<_> = xs.into_iter().collect();
    tree.len() == distinct.len() && inserted == distinct.len() && tree.is_empty() == (inserted == 0)
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: BSTree<_> = xs.into_iter().collect();

    keys(&tree, Order::In).windows(2).all(|pair| pair[0] < pair[1])
}

/// Rebuilds the shape from a preorder listing and checks the other two orders follow the
/// recursive definitions on it.
#[quickcheck]
fn orders_follow_their_definitions(xs: Vec<i32>) -> bool {
    fn post_of_pre(pre: &[i32], out: &mut Vec<i32>) {
        let Some((&root, rest)) = pre.split_first() else {
            return;
        };
        let split = rest.iter().position(|&k| k > root).unwrap_or(rest.len());
        post_of_pre(&rest[..split], out);
        post_of_pre(&rest[split..], out);
        out.push(root);
    }

    let tree: BSTree<_> = xs.into_iter().collect();
    let pre = keys(&tree, Order::Pre);
    let mut post = Vec::new();
    post_of_pre(&pre, &mut post);

    post == keys(&tree, Order::Post)
}

#[quickcheck]
fn callback_sink_sees_every_key(xs: Vec<u8>) -> bool {
    let tree: BSTree<_> = xs.into_iter().collect();
    let mut count = 0;
    tree.preorder(sink::from_fn(|_key: u8| count += 1));

    count == tree.len()
}
