use proptest::prelude::*;
use rb_forest::RbTree;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn ops_preserve_invariants(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut tree = RbTree::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    tree.insert(v);
                    let at = model.partition_point(|&x| x <= v);
                    model.insert(at, v);
                }
                Op::Remove(v) => {
                    let expected = model.binary_search(&v).ok().map(|at| model.remove(at));
                    prop_assert_eq!(tree.remove(&v), expected);
                }
            }
            prop_assert_eq!(tree.assert_valid(), Ok(()));
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model);
    }

    #[test]
    fn height_is_logarithmic(values in prop::collection::vec(any::<i32>(), 1..500)) {
        let tree: RbTree<i32> = values.iter().copied().collect();
        let bound = 2 * ((values.len() + 1) as f64).log2().floor() as isize;
        prop_assert!(tree.tree_height() <= bound);
        prop_assert_eq!(tree.size(tree.root().unwrap()), values.len());
    }

    #[test]
    fn successor_walk_matches_sorted(values in prop::collection::btree_set(any::<i32>(), 1..200)) {
        let tree: RbTree<i32> = values.iter().copied().collect();
        let sorted: Vec<i32> = values.into_iter().collect();

        let mut walked = Vec::new();
        let mut curr = tree.first();
        while let Some(id) = curr {
            walked.push(*tree.value(id).unwrap());
            curr = tree.successor(id);
        }
        prop_assert_eq!(&walked, &sorted);

        let mut back = Vec::new();
        let mut curr = tree.last();
        while let Some(id) = curr {
            back.push(*tree.value(id).unwrap());
            curr = tree.predecessor(id);
        }
        back.reverse();
        prop_assert_eq!(back, sorted);
    }

    #[test]
    fn remove_then_search_is_absent(
        values in prop::collection::btree_set(-500i32..500, 1..120),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: RbTree<i32> = values.iter().copied().collect();
        let sorted: Vec<i32> = values.into_iter().collect();
        let gone = sorted[pick.index(sorted.len())];

        prop_assert_eq!(tree.remove(&gone), Some(gone));
        prop_assert_eq!(tree.search(&gone), None);
        prop_assert_eq!(tree.remove(&gone), None);
        prop_assert_eq!(tree.len(), sorted.len() - 1);
        for v in sorted.iter().filter(|&&v| v != gone) {
            prop_assert!(tree.contains(v));
        }
        prop_assert_eq!(tree.assert_valid(), Ok(()));
    }
}
