use itertools::Itertools;

use crate::types::{Candidates, Itemset, ItemsetLength};

/// Generate candidates of `size` from the frequent itemsets of the previous
/// level, as the union of every pair whose union has exactly `size` items.
pub fn join(itemsets: &Candidates, size: ItemsetLength) -> Candidates {
    // A ∪ A never reaches `size`, so unordered distinct pairs cover every union
    itemsets
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| {
            let union: Itemset = a.iter().merge(b.iter()).dedup().copied().collect();
            if union.len() == size {
                Some(union)
            } else {
                None
            }
        })
        .collect()
}
