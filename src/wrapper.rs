use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{AprioriConfig, AprioriError, AprioriOutput};

type PyItemsets = Vec<(Vec<String>, f32)>;
type PyRules = Vec<((Vec<String>, Vec<String>), f32)>;

impl From<AprioriError> for PyErr {
    fn from(err: AprioriError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymodule]
fn apriori(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_apriori, m)?)?;
    Ok(())
}

/// Apriori algorithm for association rules.
///
/// Returns `[(items, support)]` and `[((antecedent, consequent), confidence)]`.
/// `max_len` caps the itemset size; `None` mines every level.
#[pyfunction(transactions, min_support, min_confidence, max_len = "None")]
#[pyo3(text_signature = "(transactions, min_support, min_confidence, max_len=None)")]
fn run_apriori(
    transactions: Vec<Vec<String>>,
    min_support: f32,
    min_confidence: f32,
    max_len: Option<usize>,
) -> PyResult<(PyItemsets, PyRules)> {
    let mut config = AprioriConfig::new(min_support, min_confidence);
    config.max_len = max_len;
    let output = crate::apriori(transactions, &config)?;
    Ok(convert_output(output))
}

fn convert_output(output: AprioriOutput<String>) -> (PyItemsets, PyRules) {
    let itemsets = output
        .itemsets
        .into_iter()
        .map(|itemset| (itemset.items, itemset.support))
        .collect();
    let rules = output
        .rules
        .into_iter()
        .map(|rule| ((rule.antecedent, rule.consequent), rule.confidence))
        .collect();
    (itemsets, rules)
}
