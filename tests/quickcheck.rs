//! Behavioral properties over the public API of both tree types.

use quickcheck_macros::quickcheck;

macro_rules! set_props {
    ($name:ident, $Set:ident) => {
        mod $name {
            use bbtree::$Set;
            use quickcheck_macros::quickcheck;

            #[quickcheck]
            fn iter_matches_sorted_input(keys: Vec<u8>) -> bool {
                let set: $Set<u8> = keys.iter().copied().collect();
                let mut sorted = keys;
                sorted.sort();
                set.iter().copied().collect::<Vec<_>>() == sorted
            }

            #[quickcheck]
            fn contains_every_inserted_key(keys: Vec<u32>) -> bool {
                let set: $Set<u32> = keys.iter().copied().collect();
                keys.iter().all(|key| set.contains(key))
            }

            #[quickcheck]
            fn does_not_contain_absent_keys(keys: Vec<u32>, probe: u32) -> bool {
                let set: $Set<u32> = keys.iter().copied().collect();
                set.contains(&probe) == keys.contains(&probe)
            }

            #[quickcheck]
            fn len_counts_every_insertion(keys: Vec<u8>) -> bool {
                let set: $Set<u8> = keys.iter().copied().collect();
                set.len() == keys.len() && set.is_empty() == keys.is_empty()
            }

            #[quickcheck]
            fn size_hint_is_exact(set: $Set<u32>) -> bool {
                let mut len = set.len();
                let mut it = set.iter();

                loop {
                    if it.size_hint() != (len, Some(len)) {
                        return false;
                    }
                    if it.next().is_none() {
                        break;
                    }
                    len -= 1;
                }

                len == 0
            }

            #[quickcheck]
            fn clear_empties_the_set(mut set: $Set<u32>, key: u32) -> bool {
                set.clear();
                set.is_empty() && set.len() == 0 && !set.contains(&key)
            }
        }
    };
}

set_props!(avl, AvlSet);
set_props!(rb, RbSet);

#[quickcheck]
fn avl_height_is_logarithmic(keys: Vec<u32>) -> bool {
    let set: bbtree::AvlSet<u32> = keys.iter().copied().collect();
    if set.is_empty() {
        return set.height() == -1;
    }
    // Worst-case AVL height is ~1.44 * log2(n + 2).
    let bound = 1.45 * ((set.len() + 2) as f64).log2();
    (set.height() as f64) <= bound
}

#[quickcheck]
fn rb_height_is_logarithmic(keys: Vec<u32>) -> bool {
    let set: bbtree::RbSet<u32> = keys.iter().copied().collect();
    if set.is_empty() {
        return set.height() == -1;
    }
    // Worst-case red-black height is 2 * log2(n + 1).
    let bound = 2.0 * ((set.len() + 1) as f64).log2();
    (set.height() as f64) <= bound
}

#[quickcheck]
fn trees_agree_on_membership(keys: Vec<u32>, probes: Vec<u32>) -> bool {
    let avl: bbtree::AvlSet<u32> = keys.iter().copied().collect();
    let rb: bbtree::RbSet<u32> = keys.iter().copied().collect();

    avl.len() == rb.len()
        && avl.iter().eq(rb.iter())
        && probes.iter().all(|probe| avl.contains(probe) == rb.contains(probe))
}

#[quickcheck]
fn reversed_comparator_reverses_iteration(keys: Vec<u8>) -> bool {
    use compare::{natural, Compare};

    let set: bbtree::AvlSet<u8, _> =
        keys.iter().fold(bbtree::AvlSet::with_cmp(natural().rev()), |mut set, &key| {
            set.insert(key);
            set
        });

    let mut sorted = keys;
    sorted.sort();
    sorted.reverse();
    set.iter().copied().collect::<Vec<_>>() == sorted
}
