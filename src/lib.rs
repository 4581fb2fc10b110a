//! Frequent itemsets and association rules with the Apriori algorithm.

use std::hash::Hash;

use tracing::info;

pub mod config;
pub mod error;
pub mod itemsets;
pub mod output;
pub mod records;
pub mod rules;
pub mod transactions;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use config::{AprioriConfig, LiftPolicy};
pub use error::{AprioriError, AprioriResult};
pub use itemsets::{generate_frequent_itemsets, FrequentItemsets};
pub use output::{by_confidence, by_support, AprioriOutput, AssociationRule, ItemsetSupport};
pub use rules::{filter_by_lift, generate_rules, Rule};
pub use transactions::{Transaction, TransactionStore};

/// Apriori algorithm for association rules.
///
/// Mines the frequent itemsets of `records`, derives the rules meeting
/// `config.min_confidence` and drops those with a lift of at most 1.
pub fn apriori<I, R, T>(records: I, config: &AprioriConfig) -> AprioriResult<AprioriOutput<T>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Clone + Eq + Hash,
{
    config.validate()?;

    let frequent = generate_frequent_itemsets(records, config.min_support, config.max_len)?;
    let transaction_count = frequent.transaction_count();

    let candidate_rules = generate_rules(
        frequent.levels(),
        frequent.frequency_table(),
        transaction_count,
        config.min_confidence,
    )?;
    let rules = filter_by_lift(
        candidate_rules,
        frequent.frequency_table(),
        transaction_count,
        config.lift_policy,
    )?;

    info!(
        transactions = transaction_count,
        itemsets = frequent.len(),
        rules = rules.len(),
        "Finished mining"
    );

    let store = frequent.store();
    Ok(AprioriOutput {
        itemsets: frequent.itemsets()?,
        rules: rules
            .into_iter()
            .map(|rule| AssociationRule {
                antecedent: store.resolve(rule.get_antecedent()),
                consequent: store.resolve(rule.get_consequent()),
                confidence: rule.confidence,
                lift: rule.lift,
            })
            .collect(),
    })
}
