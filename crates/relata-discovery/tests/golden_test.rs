//! Golden dataset tests for relata-discovery.
//!
//! Loads each golden case, runs the full pipeline, and checks the type-level
//! causes and the pruned survivors against the recorded expectations.

use relata_core::{DiscoveryConfig, LoneCandidatePolicy, TimeSeriesTable, TypeLevelCause};
use relata_discovery::CausalTree;
use test_fixtures::{load_golden, GoldenCase};

const EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_policy(s: Option<&str>) -> LoneCandidatePolicy {
    match s {
        Some("unconditioned") => LoneCandidatePolicy::Unconditioned,
        _ => LoneCandidatePolicy::Zero,
    }
}

fn build_tree(case: &GoldenCase) -> CausalTree {
    let mut table = TimeSeriesTable::new();
    for column in &case.columns {
        table.add_column(&column.name, column.values.clone()).unwrap();
    }
    let causes: Vec<&str> = case.causes.iter().map(String::as_str).collect();
    let config = DiscoveryConfig::default()
        .with_max_lag(case.max_lag)
        .with_lone_candidate(parse_policy(case.lone_candidate.as_deref()));
    CausalTree::with_config(table, &causes, &case.effect, config).unwrap()
}

fn identity(tree: &CausalTree, cause: &TypeLevelCause) -> (String, [usize; 2]) {
    (
        tree.variable_name(cause.relation.cause).unwrap().to_string(),
        [cause.window.start, cause.window.end],
    )
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

fn run_golden(name: &str) {
    let case = load_golden(name);
    let tree = build_tree(&case);

    let discovery = tree.build(&case.effect, case.max_lag).unwrap();
    assert_eq!(
        discovery.len(),
        case.expected.type_level.len(),
        "{name}: {}",
        case.description
    );
    for (actual, expected) in discovery.causes.iter().zip(&case.expected.type_level) {
        let (cause, window) = identity(&tree, actual);
        assert_eq!(cause, expected.cause, "{name}: cause order");
        assert_eq!(window, expected.window, "{name}: window order");
        assert_close(actual.prob, expected.prob, &format!("{name}: prob of {cause}"));
        assert_eq!(actual.token_count(), expected.token_count, "{name}: tokens of {cause}");
    }

    let survivors = tree.prune(tree.compute_significance(&discovery).unwrap());
    assert_eq!(survivors.len(), case.expected.significant.len(), "{name}: survivors");
    for (actual, expected) in survivors.iter().zip(&case.expected.significant) {
        let (cause, window) = identity(&tree, &actual.cause);
        assert_eq!(cause, expected.cause);
        assert_eq!(window, expected.window);
        assert_eq!(actual.score.len(), expected.score.len());
        for (lag, (a, e)) in actual.score.score.iter().zip(&expected.score).enumerate() {
            assert_close(*a, *e, &format!("{name}: score of {cause} at lag {lag}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Cases
// ---------------------------------------------------------------------------

#[test]
fn golden_alternating() {
    run_golden("alternating");
}

#[test]
fn golden_alternating_unconditioned() {
    run_golden("alternating_unconditioned");
}

#[test]
fn golden_co_occurring() {
    run_golden("co_occurring");
}
