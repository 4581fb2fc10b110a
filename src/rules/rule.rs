#![allow(non_snake_case)]

use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;

use crate::{
    error::{AprioriError, AprioriResult},
    itemsets::count::support_count,
    types::{FrequencyTable, ItemId, Itemset},
};

/// An association rule `antecedent => consequent`.
///
/// `combi` holds the antecedent followed by the consequent, each half sorted;
/// `split` is the length of the antecedent.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub split: usize,
    pub combi: Vec<ItemId>,
    pub confidence: f32,
    pub lift: Option<f32>,
}

impl Rule {
    /// Both sides must be non-empty and disjoint.
    pub fn new(antecedent: &[ItemId], consequent: &[ItemId]) -> Self {
        let mut combi = Vec::with_capacity(antecedent.len() + consequent.len());
        combi.extend(antecedent.iter().copied().sorted());
        combi.extend(consequent.iter().copied().sorted());

        Self {
            split: antecedent.len(),
            combi,
            confidence: 0.0,
            lift: None,
        }
    }

    pub fn get_antecedent(&self) -> &[ItemId] {
        &self.combi[..self.split]
    }

    pub fn get_consequent(&self) -> &[ItemId] {
        &self.combi[self.split..]
    }

    /// The frequent itemset this rule was split from.
    pub fn union(&self) -> Itemset {
        self.combi.iter().copied().sorted().collect()
    }

    pub fn is_single_item(&self) -> bool {
        self.get_antecedent().len() == 1 && self.get_consequent().len() == 1
    }

    /// `count(antecedent ∪ consequent) / count(antecedent)`, one division
    /// of the raw counts so exact ratios compare equal to their threshold.
    pub fn compute_confidence(&mut self, freq: &FrequencyTable) -> AprioriResult<f32> {
        let union_count = support_count(freq, &self.union())?;
        let antecedent_count = support_count(freq, self.get_antecedent())?;
        if antecedent_count == 0 {
            return Err(AprioriError::ZeroSupport {
                measure: "confidence",
                itemset: self.get_antecedent().to_vec(),
            });
        }

        self.confidence = union_count as f32 / antecedent_count as f32;
        Ok(self.confidence)
    }

    /// `support(antecedent ∪ consequent) / (support(antecedent) * support(consequent))`
    ///
    /// The stored value is for reporting. Filtering goes through
    /// [`Rule::has_positive_lift`].
    pub fn compute_lift(&mut self, freq: &FrequencyTable, N: usize) -> AprioriResult<f32> {
        let (union_count, expected) = self.lift_terms(freq, N)?;

        let lift = (union_count as f64 / expected as f64) as f32;
        self.lift = Some(lift);
        Ok(lift)
    }

    /// `lift > 1`, decided on the counts as `count(A ∪ B) * N > count(A) * count(B)`.
    pub fn has_positive_lift(&self, freq: &FrequencyTable, N: usize) -> AprioriResult<bool> {
        let (union_count, expected) = self.lift_terms(freq, N)?;
        Ok(union_count > expected)
    }

    /// `(count(A ∪ B) * N, count(A) * count(B))`
    fn lift_terms(&self, freq: &FrequencyTable, N: usize) -> AprioriResult<(u64, u64)> {
        let union_count = u64::from(support_count(freq, &self.union())?);
        let antecedent_count = u64::from(support_count(freq, self.get_antecedent())?);
        let consequent_count = u64::from(support_count(freq, self.get_consequent())?);

        let expected = antecedent_count * consequent_count;
        if N == 0 || expected == 0 {
            return Err(AprioriError::ZeroSupport {
                measure: "lift",
                itemset: self.union(),
            });
        }

        Ok((union_count * N as u64, expected))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:?} => {:?}",
            self.get_antecedent(),
            self.get_consequent()
        )
    }
}
