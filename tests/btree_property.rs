//! Property tests: random insert/delete sequences against a reference set.
//!
//! After every operation the tree must agree with `std::collections::BTreeSet`
//! on membership, error outcome and in-order contents, and must pass its own
//! structural invariant check.

use std::collections::BTreeSet;

use btree_index::{BTree, Error};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Delete(u16),
    PopFirst,
    PopLast,
}

fn arb_op(key_space: u16) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..key_space).prop_map(Op::Insert),
        3 => (0..key_space).prop_map(Op::Delete),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ]
}

fn apply(tree: &mut BTree<u16>, model: &mut BTreeSet<u16>, op: &Op) -> Result<(), TestCaseError> {
    match *op {
        Op::Insert(key) => {
            let expected = if model.insert(key) {
                Ok(())
            } else {
                Err(Error::DuplicateKey)
            };
            prop_assert_eq!(tree.insert(key), expected);
        }
        Op::Delete(key) => {
            let expected = if model.remove(&key) {
                Ok(())
            } else {
                Err(Error::KeyNotFound)
            };
            prop_assert_eq!(tree.delete(&key), expected);
        }
        Op::PopFirst => {
            prop_assert_eq!(tree.pop_first(), model.pop_first());
        }
        Op::PopLast => {
            prop_assert_eq!(tree.pop_last(), model.pop_last());
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_matches_reference_set(
        min_degree in 2usize..=5,
        ops in prop::collection::vec(arb_op(200), 1..400),
    ) {
        let mut tree = BTree::new(min_degree).unwrap();
        let mut model = BTreeSet::new();

        for op in &ops {
            apply(&mut tree, &mut model, op)?;
            if let Err(err) = tree.check_invariants() {
                return Err(TestCaseError::fail(format!("{err} after {op:?}")));
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        let ours: Vec<u16> = tree.iter().copied().collect();
        let theirs: Vec<u16> = model.iter().copied().collect();
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn prop_search_round_trip(
        min_degree in 2usize..=4,
        keys in prop::collection::btree_set(any::<i32>(), 0..300),
    ) {
        let mut tree = BTree::new(min_degree).unwrap();
        for &key in &keys {
            tree.insert(key).unwrap();
        }
        for key in &keys {
            prop_assert_eq!(tree.search(key).key(), Some(key));
        }

        // Delete every other key; the rest must survive.
        let (gone, kept): (Vec<i32>, Vec<i32>) =
            keys.iter().copied().enumerate().fold((Vec::new(), Vec::new()), |mut acc, (i, k)| {
                if i % 2 == 0 { acc.0.push(k) } else { acc.1.push(k) }
                acc
            });
        for key in &gone {
            tree.delete(key).unwrap();
        }
        tree.check_invariants().unwrap();
        for key in &gone {
            prop_assert!(!tree.search(key).is_found());
        }
        for key in &kept {
            prop_assert!(tree.contains(key));
        }
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), kept);
    }

    #[test]
    fn prop_first_last_match_extremes(
        keys in prop::collection::vec(any::<i64>(), 1..200),
    ) {
        let mut tree = BTree::new(3).unwrap();
        for &key in &keys {
            let _ = tree.insert(key);
        }
        prop_assert_eq!(tree.first(), keys.iter().min());
        prop_assert_eq!(tree.last(), keys.iter().max());
    }
}
