use std::hash::Hash;

use bitvec::prelude::*;

use crate::types::{Candidates, Inventory, ItemId, Itemset, ReverseLookup};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary
const APPROX_NUM_ITEMS_IN_1_TRANSACTION: usize = 16; // arbitrary

/// One observed record, as interned item ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: Vec<ItemId>,
    mask: BitVec,
}

impl Transaction {
    /// The mask spans `universe` bits, grown to cover the largest id.
    pub fn new(mut items: Vec<ItemId>, universe: usize) -> Self {
        items.sort_unstable();
        items.dedup();

        let universe = items.last().map_or(universe, |&last| universe.max(last + 1));
        let mut mask = bitvec![0; universe];
        for &item in &items {
            mask.set(item, true);
        }

        Self { items, mask }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.mask.get(item).map_or(false, |bit| *bit)
    }

    pub fn is_superset_of(&self, itemset: &[ItemId]) -> bool {
        itemset.len() <= self.items.len() && itemset.iter().all(|&item| self.contains(item))
    }
}

/// The item universe and transaction list of one mining run.
#[derive(Debug, Clone)]
pub struct TransactionStore<T> {
    inventory: Inventory<T>,
    reverse_lookup: ReverseLookup<T>,
    transactions: Vec<Transaction>,
}

impl<T> TransactionStore<T>
where
    T: Clone + Eq + Hash,
{
    /// Drains `records` once. Record order and repeated records are kept.
    pub fn from_records<I, R>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut reverse_lookup: ReverseLookup<T> =
            ReverseLookup::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut inventory: Inventory<T> = Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS);

        let raw_transactions: Vec<Vec<ItemId>> = records
            .into_iter()
            .map(|record| {
                let mut items = Vec::with_capacity(APPROX_NUM_ITEMS_IN_1_TRANSACTION);

                for item in record {
                    let item_id = match reverse_lookup.get(&item) {
                        Some(&item_id) => item_id,
                        None => {
                            let item_id = inventory.len();
                            reverse_lookup.insert(item.clone(), item_id);
                            inventory.push(item);
                            item_id
                        }
                    };
                    items.push(item_id);
                }

                items
            })
            .collect();

        // Masks need the final universe size
        let universe = inventory.len();
        let transactions = raw_transactions
            .into_iter()
            .map(|items| Transaction::new(items, universe))
            .collect();

        Self {
            inventory,
            reverse_lookup,
            transactions,
        }
    }

    pub fn lookup(&self, item: &T) -> Option<ItemId> {
        self.reverse_lookup.get(item).copied()
    }

    /// Interns a whole itemset, returning `None` if any item was never seen.
    pub fn itemset_of<'a, I>(&self, items: I) -> Option<Itemset>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut itemset = items
            .into_iter()
            .map(|item| self.lookup(item))
            .collect::<Option<Itemset>>()?;
        itemset.sort_unstable();
        itemset.dedup();
        Some(itemset)
    }
}

impl<T> TransactionStore<T> {
    /// Every distinct item as a 1-itemset.
    pub fn one_candidates(&self) -> Candidates {
        (0..self.inventory.len()).map(|item| vec![item]).collect()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.inventory.len()
    }

    pub fn item(&self, item_id: ItemId) -> Option<&T> {
        self.inventory.get(item_id)
    }

    pub fn inventory(&self) -> &[T] {
        &self.inventory
    }
}

impl<T: Clone> TransactionStore<T> {
    /// Maps ids back to items. Ids must come from this store.
    pub fn resolve(&self, itemset: &[ItemId]) -> Vec<T> {
        itemset
            .iter()
            .filter_map(|&item_id| self.inventory.get(item_id).cloned())
            .collect()
    }
}
