#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// The "things" a quicktest does to a tree through its public API.
#[derive(Clone, Debug)]
enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Copy the tree and keep working on the copy
    Fork,
    /// Remove everything
    Clear,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Fork,
            2 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
