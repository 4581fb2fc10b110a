use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type ItemId = usize;
/// Sorted, duplicate-free list of item ids.
pub type Itemset = Vec<ItemId>;

pub type Inventory<T> = Vec<T>;
pub type ReverseLookup<T> = HashMap<T, ItemId>;

pub type ItemsetLength = usize;
pub type FrequencyTable = HashMap<Itemset, u32>;
pub type Candidates = BTreeSet<Itemset>;
pub type LevelSet = BTreeMap<ItemsetLength, BTreeSet<Itemset>>;
