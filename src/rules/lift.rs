#![allow(non_snake_case)]

use tracing::{debug, info};

use crate::{
    config::LiftPolicy,
    error::AprioriResult,
    rules::rule::Rule,
    types::FrequencyTable,
};

/// Keep the rules whose lift is strictly greater than 1.
///
/// Single-item rules are always checked. Rules with a multi-item side are
/// handled according to `policy`.
pub fn filter_by_lift(
    rules: Vec<Rule>,
    freq: &FrequencyTable,
    N: usize,
    policy: LiftPolicy,
) -> AprioriResult<Vec<Rule>> {
    let total = rules.len();
    let mut valid = Vec::with_capacity(total);

    for mut rule in rules {
        if !rule.is_single_item() {
            match policy {
                LiftPolicy::PassThrough => {
                    valid.push(rule);
                    continue;
                }
                LiftPolicy::Reject => {
                    debug!(rule = %rule, "Rejected multi-item rule");
                    continue;
                }
                LiftPolicy::Generalized => {}
            }
        }

        let lift = rule.compute_lift(freq, N)?;
        if rule.has_positive_lift(freq, N)? {
            debug!(rule = %rule, confidence = rule.confidence, lift, "valid");
            valid.push(rule);
        } else {
            debug!(rule = %rule, confidence = rule.confidence, lift, "invalid");
        }
    }

    info!(removed = total - valid.len(), kept = valid.len(), "Filtered rules by lift");

    Ok(valid)
}
