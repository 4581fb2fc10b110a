use apriori::{
    apriori, generate_frequent_itemsets, generate_rules, AprioriConfig, AprioriError, LiftPolicy,
};

const A: &str = "A";
const B: &str = "B";
const C: &str = "C";

fn transactions() -> Vec<Vec<&'static str>> {
    vec![vec![A, B], vec![A, B], vec![A, C]]
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn frequent_itemsets_at_half_support() {
    let frequent = generate_frequent_itemsets(transactions(), 0.5, None).unwrap();
    let store = frequent.store();
    let id = |item| store.lookup(&item).unwrap();

    assert!(close(frequent.support(&[id(A)]).unwrap(), 1.0));
    assert!(close(frequent.support(&[id(B)]).unwrap(), 0.667));
    assert!(close(frequent.support(&[id(C)]).unwrap(), 0.333));

    let level_1: Vec<_> = frequent.levels()[&1_usize].iter().cloned().collect();
    assert_eq!(level_1, vec![vec![id(A)], vec![id(B)]]);

    let level_2: Vec<_> = frequent.levels()[&2_usize].iter().cloned().collect();
    assert_eq!(level_2, vec![vec![id(A), id(B)]]);
    assert!(close(frequent.support(&[id(A), id(B)]).unwrap(), 0.667));

    assert_eq!(frequent.levels().len(), 2);
}

#[test]
fn rules_at_confidence_0_6() {
    let frequent = generate_frequent_itemsets(transactions(), 0.5, None).unwrap();
    let store = frequent.store();

    let rules = generate_rules(
        frequent.levels(),
        frequent.frequency_table(),
        frequent.transaction_count(),
        0.6,
    )
    .unwrap();

    assert_eq!(rules.len(), 2);
    let confidence = |antecedent: &str| {
        rules
            .iter()
            .find(|rule| store.resolve(rule.get_antecedent()) == vec![antecedent])
            .map(|rule| rule.confidence)
            .unwrap()
    };
    assert!(close(confidence(B), 1.0));
    assert!(close(confidence(A), 0.667));
}

#[test]
fn lift_of_one_is_discarded() {
    let config = AprioriConfig::new(0.5, 0.6);

    let output = apriori(transactions(), &config).unwrap();

    assert_eq!(output.itemsets.len(), 3);
    assert!(output.rules.is_empty());
}

#[test]
fn positive_association_survives_lift_filter() {
    let transactions = vec![vec![A, B], vec![A, B], vec![C], vec![C]];
    let config = AprioriConfig::new(0.5, 0.6);

    let output = apriori(transactions, &config).unwrap();

    // lift(A, B) = 0.5 / (0.5 * 0.5) = 2
    assert_eq!(output.rules.len(), 2);
    assert!(output.rules.iter().all(|rule| rule.lift == Some(2.0)));
    assert!(output.rules.iter().all(|rule| rule.confidence == 1.0));
}

#[test]
fn confidence_equal_to_threshold_is_kept() {
    let mut transactions = vec![vec![A, B]; 3];
    transactions.extend(vec![vec![A]; 2]);
    transactions.extend(vec![vec![C]; 2]);
    let config = AprioriConfig::new(0.1, 0.6);

    let output = apriori(transactions, &config).unwrap();

    // conf(A => B) = 3 / 5, lift = (3 * 7) / (5 * 3) > 1
    let a_to_b = output
        .rules
        .iter()
        .find(|rule| rule.antecedent == vec![A] && rule.consequent == vec![B])
        .unwrap();
    assert_eq!(a_to_b.confidence, 0.6);
    assert_eq!(output.rules.len(), 2);
}

#[test]
fn lift_of_exactly_one_is_discarded_for_any_transaction_count() {
    // A: 30, B: 36, AB: 27 of 40, so support(AB) == support(A) * support(B)
    let mut transactions = vec![vec![A, B]; 27];
    transactions.extend(vec![vec![A]; 3]);
    transactions.extend(vec![vec![B]; 9]);
    transactions.push(vec![C]);
    let config = AprioriConfig::new(0.5, 0.5);

    let output = apriori(transactions, &config).unwrap();

    assert_eq!(output.itemsets.len(), 3);
    assert!(output.rules.is_empty());
}

#[test]
fn empty_transactions_yield_empty_results() {
    let config = AprioriConfig::new(0.5, 0.6);

    let output = apriori(Vec::<Vec<&str>>::new(), &config).unwrap();

    assert!(output.itemsets.is_empty());
    assert!(output.rules.is_empty());
}

#[test]
fn invalid_support_is_rejected_before_scanning() {
    let config = AprioriConfig::new(1.5, 0.6);
    let records = transactions().into_iter().inspect(|_| panic!("scanned records"));

    let err = apriori(records, &config).unwrap_err();

    assert!(matches!(
        err,
        AprioriError::InvalidParameter { name: "min_support", value } if value == 1.5
    ));
}

#[test]
fn multi_item_rules_follow_the_lift_policy() {
    let transactions = vec![vec![A, B, C], vec![A, B, C], vec![A], vec![B]];
    let pass = AprioriConfig::new(0.5, 0.9);
    let reject = pass.clone().with_lift_policy(LiftPolicy::Reject);

    let passed = apriori(transactions.clone(), &pass).unwrap();
    let rejected = apriori(transactions, &reject).unwrap();

    let multi = |rules: &[apriori::AssociationRule<&str>]| {
        rules
            .iter()
            .filter(|rule| rule.antecedent.len() > 1 || rule.consequent.len() > 1)
            .count()
    };
    assert!(multi(&passed.rules) > 0);
    assert!(passed
        .rules
        .iter()
        .filter(|rule| rule.antecedent.len() > 1 || rule.consequent.len() > 1)
        .all(|rule| rule.lift.is_none()));
    assert_eq!(multi(&rejected.rules), 0);
}

#[test]
fn reads_delimited_records() {
    let input = std::io::Cursor::new("MBE,ASIAN,\nMBE,ASIAN,\nWBE,NON-MINORITY,\nWBE,NON-MINORITY,\n");
    let records = apriori::records::read_records(input, apriori::records::DEFAULT_SEPARATOR)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let config = AprioriConfig::new(0.5, 0.6);

    let mut output = apriori(records, &config).unwrap();
    output.sort();

    assert_eq!(output.itemsets.len(), 6);
    assert_eq!(output.rules.len(), 4);
    assert!(output.rules.iter().all(|rule| rule.lift == Some(2.0)));
}
