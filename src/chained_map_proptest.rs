#![cfg(test)]

// Property tests for ChainedMap kept inside the crate so they can check
// per-bucket chain lengths against a model.

use crate::chained_map::ChainedMap;
use crate::error::ValueNotFound;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize),
    Has(usize),
    Unmap(usize),
    GetRaw(u32),
}

fn arb_scenario(max_key: u32) -> impl Strategy<Value = (Vec<u32>, Vec<OpI>)> {
    proptest::collection::vec(0..max_key, 1..=12).prop_flat_map(move |pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Has),
            idx.clone().prop_map(OpI::Unmap),
            (0..max_key).prop_map(OpI::GetRaw),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives one op sequence against the map and a HashMap model, checking after
// every step that each bucket's chain holds exactly the model keys hashing
// there (so no key is ever duplicated or misplaced).
fn run_against_model<const C: usize>(
    pool: &[u32],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut sut: ChainedMap<u32, i32, C> = ChainedMap::new();
    let mut model: HashMap<u32, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = pool[i];
                sut.put(k, v);
                model.insert(k, v);
                prop_assert_eq!(sut.get(k), Ok(&v));
            }
            OpI::Get(i) => {
                let k = pool[i];
                match model.get(&k) {
                    Some(v) => prop_assert_eq!(sut.get(k), Ok(v)),
                    None => prop_assert_eq!(sut.get(k), Err(ValueNotFound::new(k))),
                }
            }
            OpI::Has(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.has_value_for(k), model.contains_key(&k));
            }
            OpI::Unmap(i) => {
                let k = pool[i];
                sut.unmap(k);
                model.remove(&k);
                prop_assert!(!sut.has_value_for(k));
            }
            OpI::GetRaw(k) => {
                prop_assert_eq!(sut.get(k).ok(), model.get(&k));
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let mut per_bucket = vec![0usize; C];
        for k in model.keys() {
            per_bucket[ChainedMap::<u32, i32, C>::hash(*k)] += 1;
        }
        for (bucket, expected) in per_bucket.into_iter().enumerate() {
            prop_assert_eq!(sut.chain_len(bucket), expected, "bucket {}", bucket);
        }
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap at the
// default capacity, where collisions are rare.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(4096)) {
        run_against_model::<1024>(&pool, ops)?;
    }
}

// Property: Same invariants with four buckets, so most keys collide and chain
// unlinking from the head, middle and tail is exercised.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(64)) {
        run_against_model::<4>(&pool, ops)?;
    }
}
