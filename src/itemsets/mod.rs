pub mod count;
pub mod engine;
pub mod search;

pub use engine::{generate_frequent_itemsets, FrequentItemsets};
