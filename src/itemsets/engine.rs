use std::hash::Hash;

use tracing::debug;

use crate::{
    config::check_fraction,
    error::{AprioriError, AprioriResult},
    itemsets::{count::filter_by_min_support, count::support, search::join},
    output::ItemsetSupport,
    transactions::TransactionStore,
    types::{Candidates, FrequencyTable, ItemId, ItemsetLength, LevelSet},
};

/// Result of the level-wise search. Read-only once mining has finished.
#[derive(Debug, Clone)]
pub struct FrequentItemsets<T> {
    store: TransactionStore<T>,
    levels: LevelSet,
    freq: FrequencyTable,
}

/// Generate frequent itemsets from a sequence of records.
///
/// Levels are mined until one comes up empty, or until level `max_len` has
/// been recorded. `min_support` is checked before `records` is touched.
pub fn generate_frequent_itemsets<I, R, T>(
    records: I,
    min_support: f32,
    max_len: Option<ItemsetLength>,
) -> AprioriResult<FrequentItemsets<T>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Clone + Eq + Hash,
{
    check_fraction("min_support", min_support)?;
    if max_len == Some(0) {
        return Err(AprioriError::InvalidMaxLen);
    }

    let store = TransactionStore::from_records(records);
    let transactions = store.transactions();
    debug!(
        transactions = transactions.len(),
        items = store.num_items(),
        "Materialized transactions"
    );

    let mut freq = FrequencyTable::new();
    let mut levels = LevelSet::new();

    let mut current = filter_by_min_support(
        &store.one_candidates(),
        transactions,
        min_support,
        &mut freq,
    );
    let mut size: ItemsetLength = 2;

    while !current.is_empty() {
        debug!(size = size - 1, frequent = current.len(), "Recorded level");
        let candidates = if max_len.map_or(true, |max_len| size <= max_len) {
            join(&current, size)
        } else {
            Candidates::new()
        };
        levels.insert(size - 1, current);

        if candidates.is_empty() {
            break;
        }

        debug!(size, candidates = candidates.len(), "Counting candidates");
        current = filter_by_min_support(&candidates, transactions, min_support, &mut freq);
        size += 1;
    }

    Ok(FrequentItemsets {
        store,
        levels,
        freq,
    })
}

impl<T> FrequentItemsets<T> {
    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.freq
    }

    pub fn transaction_count(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &TransactionStore<T> {
        &self.store
    }

    pub fn support(&self, itemset: &[ItemId]) -> AprioriResult<f32> {
        support(&self.freq, itemset, self.transaction_count())
    }

    pub fn len(&self) -> usize {
        self.levels.values().map(|level| level.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<T: Clone> FrequentItemsets<T> {
    /// Every frequent itemset with its support, level by level.
    pub fn itemsets(&self) -> AprioriResult<Vec<ItemsetSupport<T>>> {
        self.levels
            .values()
            .flatten()
            .map(|itemset| {
                Ok(ItemsetSupport {
                    items: self.store.resolve(itemset),
                    support: self.support(itemset)?,
                })
            })
            .collect()
    }
}
