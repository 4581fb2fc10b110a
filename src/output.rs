use std::cmp::Ordering;

use serde::Serialize;

/// A frequent itemset and the fraction of transactions containing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsetSupport<T> {
    pub items: Vec<T>,
    pub support: f32,
}

/// An association rule with its items resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule<T> {
    pub antecedent: Vec<T>,
    pub consequent: Vec<T>,
    pub confidence: f32,
    /// `None` when the rule bypassed lift filtering.
    pub lift: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AprioriOutput<T> {
    pub itemsets: Vec<ItemsetSupport<T>>,
    pub rules: Vec<AssociationRule<T>>,
}

/// Ascending by support.
pub fn by_support<T>(a: &ItemsetSupport<T>, b: &ItemsetSupport<T>) -> Ordering {
    a.support.total_cmp(&b.support)
}

/// Ascending by confidence.
pub fn by_confidence<T>(a: &AssociationRule<T>, b: &AssociationRule<T>) -> Ordering {
    a.confidence.total_cmp(&b.confidence)
}

impl<T> AprioriOutput<T> {
    /// Sort itemsets by support and rules by confidence, both ascending.
    pub fn sort(&mut self) {
        self.itemsets.sort_by(by_support);
        self.rules.sort_by(by_confidence);
    }
}
