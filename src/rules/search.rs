#![allow(non_snake_case)]

use itertools::Itertools;
use tracing::debug;

use crate::{
    config::check_fraction,
    error::AprioriResult,
    rules::rule::Rule,
    types::{FrequencyTable, ItemId, LevelSet},
};

/// Generate rules from every frequent itemset of size 2 or more.
///
/// Each non-empty proper subset of an itemset becomes an antecedent, with the
/// remaining items as consequent. Rules below `min_conf` are dropped.
/// Confidence is taken from the raw counts, so `N` only guards the empty run.
pub fn generate_rules(
    levels: &LevelSet,
    freq: &FrequencyTable,
    N: usize,
    min_conf: f32,
) -> AprioriResult<Vec<Rule>> {
    check_fraction("min_confidence", min_conf)?;
    let mut final_rules = vec![];
    if N == 0 {
        return Ok(final_rules);
    }

    for (&itemset_size, itemsets) in levels.range(2_usize..) {
        let before = final_rules.len();
        for combi in itemsets {
            final_rules.extend(splits(combi, freq, min_conf)?);
        }
        debug!(
            size = itemset_size,
            rules = final_rules.len() - before,
            "Derived rules"
        );
    }

    Ok(final_rules)
}

/// Given a combination, find the rules it produces that meet `min_conf`.
pub fn splits(
    combi: &[ItemId],
    freq: &FrequencyTable,
    min_conf: f32,
) -> AprioriResult<Vec<Rule>> {
    let mut rules = vec![];

    for split in 1..combi.len() {
        for antecedent in combi.iter().copied().combinations(split) {
            let consequent: Vec<ItemId> = combi
                .iter()
                .copied()
                .filter(|item| !antecedent.contains(item))
                .collect();

            let mut rule = Rule::new(&antecedent, &consequent);
            if rule.compute_confidence(freq)? >= min_conf {
                rules.push(rule);
            }
        }
    }

    Ok(rules)
}
