use std::collections::BTreeMap;

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use salvo::{coord::all_keys, BoardIndex, SearchTree};

#[derive(Debug, Clone)]
enum Op {
    Insert(u32),
    Delete(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..64).prop_map(Op::Insert),
        (0u32..64).prop_map(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tree_matches_btreemap(ops in prop::collection::vec(op(), 0..200)) {
        let mut tree = SearchTree::new();
        let mut model = BTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    let inserted = tree.insert(k, k * 10).is_ok();
                    prop_assert_eq!(inserted, !model.contains_key(&k));
                    model.entry(k).or_insert(k * 10);
                }
                Op::Delete(k) => {
                    prop_assert_eq!(tree.delete(k), model.remove(&k));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }
        let ordered: Vec<(u32, u32)> = tree.in_order().into_iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(u32, u32)> = model.into_iter().collect();
        prop_assert_eq!(ordered, expected);
    }

    #[test]
    fn random_shots_are_tracked(seed in any::<u64>(), size in 5u8..=12) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = BoardIndex::new(size);
        let keys = all_keys(size);
        let shots = rng.random_range(0..keys.len());
        let mut fired = std::collections::HashSet::new();
        for _ in 0..shots {
            let key = keys[rng.random_range(0..keys.len())];
            if fired.insert(key) {
                board.mark_shot(key).unwrap();
            }
        }
        let stats = board.statistics();
        prop_assert_eq!(stats.shot_cells, fired.len());
        prop_assert_eq!(stats.remaining_cells, keys.len() - fired.len());
        prop_assert_eq!(board.unshot().len(), stats.remaining_cells);
    }
}
