#![allow(non_snake_case)]

use tracing::debug;

use crate::{
    error::{AprioriError, AprioriResult},
    transactions::Transaction,
    types::{Candidates, FrequencyTable, ItemId},
};

/// Count every candidate against every transaction and keep the frequent ones.
///
/// Each containing transaction adds one to `freq[candidate]`. A candidate is
/// kept iff `freq[candidate] / len(transactions) >= min_support`. With no
/// transactions nothing is counted and nothing is kept.
pub fn filter_by_min_support(
    candidates: &Candidates,
    transactions: &[Transaction],
    min_support: f32,
    freq: &mut FrequencyTable,
) -> Candidates {
    if transactions.is_empty() {
        return Candidates::new();
    }
    let N = transactions.len() as f32;

    let frequent: Candidates = candidates
        .iter()
        .filter(|candidate| {
            let candidate_count = transactions
                .iter()
                .filter(|transaction| transaction.len() >= candidate.len())
                .filter(|transaction| transaction.is_superset_of(candidate))
                .count() as u32;

            let count = freq.entry(candidate.to_vec()).or_insert(0);
            *count += candidate_count;

            (*count as f32 / N) >= min_support
        })
        .cloned()
        .collect();

    debug!(
        candidates = candidates.len(),
        frequent = frequent.len(),
        "Pruned candidates by min support"
    );

    frequent
}

pub fn support_count(freq: &FrequencyTable, itemset: &[ItemId]) -> AprioriResult<u32> {
    freq.get(itemset)
        .copied()
        .ok_or_else(|| AprioriError::MissingSupportEntry {
            itemset: itemset.to_vec(),
        })
}

/// Fraction of the `N` transactions containing `itemset`.
pub fn support(freq: &FrequencyTable, itemset: &[ItemId], N: usize) -> AprioriResult<f32> {
    if N == 0 {
        return Err(AprioriError::ZeroSupport {
            measure: "support",
            itemset: itemset.to_vec(),
        });
    }
    Ok(support_count(freq, itemset)? as f32 / N as f32)
}
