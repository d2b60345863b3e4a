//! Property tests for relata-discovery.

use proptest::prelude::*;

use relata_core::{TimeSeriesTable, Window};
use relata_discovery::{evidence, predicates, pruning, search, windows, CausalTree};

/// Random binary table with columns `c0..c{n-1}` and effect `e`, all of
/// length `len`.
fn table_strategy(
    causes: usize,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<Vec<i64>>> {
    len.prop_flat_map(move |len| {
        prop::collection::vec(prop::collection::vec(0_i64..=1, len), causes + 1)
    })
}

fn make_tree(columns: &[Vec<i64>]) -> CausalTree {
    let mut table = TimeSeriesTable::new();
    let (effect, causes) = columns.split_last().unwrap();
    let names: Vec<String> = (0..causes.len()).map(|i| format!("c{i}")).collect();
    for (name, values) in names.iter().zip(causes) {
        table.add_column(name, values.clone()).unwrap();
    }
    table.add_column("e", effect.clone()).unwrap();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    CausalTree::new(table, &refs, "e").unwrap()
}

fn window_strategy(max_lag: usize) -> impl Strategy<Value = Window> {
    (1..max_lag).prop_flat_map(move |start| ((start + 1)..=max_lag).prop_map(move |end| Window::new(start, end)))
}

proptest! {
    #[test]
    fn window_count_is_n_choose_two(max_lag in 2_usize..40) {
        let all = windows::enumerate(max_lag);
        prop_assert_eq!(all.len(), max_lag * (max_lag - 1) / 2);
        prop_assert!(all.iter().all(|w| 1 <= w.start && w.start < w.end && w.end <= max_lag));
    }

    #[test]
    fn absence_iff_nothing_fires(
        columns in table_strategy(1, 0..30),
        window in window_strategy(6),
    ) {
        let (cause, effect) = (&columns[0], &columns[1]);
        let relation = relata_core::CausalRelation::new(
            relata_core::VariableIndex(0),
            relata_core::VariableIndex(1),
        );
        let fires = (0..search::scan_limit(effect.len(), window))
            .any(|t| predicates::c_leadsto_e_in(cause, effect, window, t) == 1);
        let found = search::identify_potential_cause(relation, cause, effect, window);
        prop_assert_eq!(found.is_some(), fires);
        if let Some(found) = found {
            prop_assert!(found.prob > 0.0 && found.prob <= 1.0, "prob {}", found.prob);
        }
    }

    #[test]
    fn tokens_match_effect_occurrences_in_window(
        columns in table_strategy(1, 1..30),
        window in window_strategy(6),
        t_seed in 0_usize..1000,
    ) {
        let (cause, effect) = (&columns[0], &columns[1]);
        let t = t_seed % effect.len();
        let times = evidence::token_effect_times(cause, effect, window, t);
        if predicates::c_leadsto_e_in(cause, effect, window, t) == 1 {
            let expected = window
                .translate(t)
                .range()
                .filter(|&i| effect.get(i) == Some(&1))
                .count();
            prop_assert_eq!(times.len(), expected);
            prop_assert!(predicates::cause_holds_at(cause, t));
            prop_assert!(times.iter().all(|&i| window.translate(t).contains(i) && effect[i] == 1));
        } else {
            prop_assert!(times.is_empty());
        }
    }

    #[test]
    fn pruning_is_idempotent_and_keeps_only_positive_totals(
        columns in table_strategy(3, 4..25),
        max_lag in 2_usize..5,
    ) {
        let tree = make_tree(&columns);
        let discovery = tree.build("e", max_lag).unwrap();
        let scored = tree.compute_significance(&discovery).unwrap();
        prop_assert_eq!(scored.len(), discovery.len());

        let pruned = pruning::prune(scored.clone());
        prop_assert!(pruned.iter().all(|s| s.score.total() > 0.0));
        prop_assert!(pruned.iter().all(|s| scored.contains(s)));
        prop_assert_eq!(pruning::prune(pruned.clone()), pruned);
    }

    #[test]
    fn scores_cover_every_lag(
        columns in table_strategy(2, 4..25),
        max_lag in 2_usize..6,
    ) {
        let tree = make_tree(&columns);
        let discovery = tree.build("e", max_lag).unwrap();
        for scored in tree.compute_significance(&discovery).unwrap() {
            prop_assert_eq!(scored.score.len(), max_lag + 1);
        }
    }
}
