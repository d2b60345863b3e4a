//! Structural checks on the input table.
//!
//! Both checks always run so one error reports every problem at once.

use relata_core::errors::{InputError, RelataResult};
use relata_core::TimeSeriesTable;

/// Reject the table if any requested variable is missing or any column holds
/// a value outside {0, 1}.
pub fn validate(
    table: &TimeSeriesTable,
    cause_names: &[&str],
    effect_name: &str,
) -> RelataResult<()> {
    let missing_variables = missing_variables(table, cause_names, effect_name);
    let non_binary_columns = non_binary_columns(table);

    if missing_variables.is_empty() && non_binary_columns.is_empty() {
        return Ok(());
    }
    Err(InputError::Rejected {
        missing_variables,
        non_binary_columns,
    }
    .into())
}

/// Names from `cause_names` and `effect_name` that the table lacks, each
/// reported once in request order.
pub fn missing_variables(
    table: &TimeSeriesTable,
    cause_names: &[&str],
    effect_name: &str,
) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for &name in cause_names.iter().chain(std::iter::once(&effect_name)) {
        if !table.contains_column(name) && !missing.iter().any(|m| m == name) {
            missing.push(name.to_string());
        }
    }
    missing
}

/// Every column, requested or not, whose values are not a subset of {0, 1}.
pub fn non_binary_columns(table: &TimeSeriesTable) -> Vec<String> {
    table
        .columns()
        .filter(|(_, values)| !is_binary(values))
        .map(|(name, _)| name.to_string())
        .collect()
}

pub fn is_binary(values: &[i64]) -> bool {
    values.iter().all(|&v| v == 0 || v == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TimeSeriesTable {
        TimeSeriesTable::new()
            .with_column("a", vec![0, 1, 0])
            .unwrap()
            .with_column("b", vec![1, 1, 0])
            .unwrap()
            .with_column("noise", vec![0, 2, 1])
            .unwrap()
    }

    #[test]
    fn missing_names_are_deduplicated() {
        let missing = missing_variables(&table(), &["x", "a", "x"], "y");
        assert_eq!(missing, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn unrequested_columns_are_still_checked_for_binarity() {
        assert_eq!(non_binary_columns(&table()), vec!["noise".to_string()]);
    }

    #[test]
    fn empty_column_is_binary() {
        assert!(is_binary(&[]));
    }
}
