//! Errors raised while mining itemsets and deriving rules.

use crate::types::ItemId;

/// Errors that can abort a mining run.
#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    #[error("Invalid parameter {name}: {value} is outside (0, 1]")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Invalid max_len: itemsets must be allowed at least 1 item")]
    InvalidMaxLen,

    #[error("Missing support entry for itemset {itemset:?}: level history is malformed")]
    MissingSupportEntry { itemset: Vec<ItemId> },

    #[error("Zero denominator computing {measure} for itemset {itemset:?}")]
    ZeroSupport {
        measure: &'static str,
        itemset: Vec<ItemId>,
    },

    #[error("Failed to read records: {0}")]
    Io(#[from] std::io::Error),
}

pub type AprioriResult<T> = Result<T, AprioriError>;
