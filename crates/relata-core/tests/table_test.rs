use relata_core::errors::{InputError, RelataError};
use relata_core::TimeSeriesTable;

#[test]
fn columns_keep_insertion_order() {
    let table = TimeSeriesTable::new()
        .with_column("b", vec![0, 1])
        .unwrap()
        .with_column("a", vec![1, 1])
        .unwrap();
    assert_eq!(table.column_names(), ["b".to_string(), "a".to_string()]);
    assert_eq!(table.num_time_steps(), 2);
    assert_eq!(table.num_columns(), 2);
    assert_eq!(table.column("a"), Some(&[1, 1][..]));
    assert_eq!(table.column("z"), None);
}

#[test]
fn empty_table_has_no_time_steps() {
    assert_eq!(TimeSeriesTable::new().num_time_steps(), 0);
}

#[test]
fn length_mismatch_is_rejected() {
    let err = TimeSeriesTable::new()
        .with_column("a", vec![0, 1, 0])
        .unwrap()
        .with_column("b", vec![0, 1])
        .unwrap_err();
    assert!(matches!(
        err,
        RelataError::InvalidInput(InputError::ColumnLengthMismatch {
            expected: 3,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn duplicate_column_is_rejected() {
    let mut table = TimeSeriesTable::new();
    table.add_column("a", vec![0]).unwrap();
    let err = table.add_column("a", vec![1]).unwrap_err();
    assert!(matches!(
        err,
        RelataError::InvalidInput(InputError::DuplicateColumn { .. })
    ));
}
