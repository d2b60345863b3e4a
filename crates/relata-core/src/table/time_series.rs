use std::collections::HashMap;

use crate::errors::{InputError, RelataResult};

/// Named integer columns over a common zero-based time index.
///
/// Values are kept raw so validation can report non-binary columns; discovery
/// only reads tables whose columns are all within {0, 1}.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesTable {
    names: Vec<String>,
    columns: Vec<Vec<i64>>,
    by_name: HashMap<String, usize>,
}

impl TimeSeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TimeSeriesTable::add_column`].
    pub fn with_column(mut self, name: &str, values: Vec<i64>) -> RelataResult<Self> {
        self.add_column(name, values)?;
        Ok(self)
    }

    /// Append a column. Every column must have the same number of time steps.
    pub fn add_column(&mut self, name: &str, values: Vec<i64>) -> RelataResult<()> {
        if self.by_name.contains_key(name) {
            return Err(InputError::DuplicateColumn {
                name: name.to_string(),
            }
            .into());
        }
        if let Some(first) = self.columns.first() {
            if first.len() != values.len() {
                return Err(InputError::ColumnLengthMismatch {
                    column: name.to_string(),
                    expected: first.len(),
                    actual: values.len(),
                }
                .into());
            }
        }
        self.by_name.insert(name.to_string(), self.columns.len());
        self.names.push(name.to_string());
        self.columns.push(values);
        Ok(())
    }

    /// Number of rows, `T`.
    pub fn num_time_steps(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn column(&self, name: &str) -> Option<&[i64]> {
        self.by_name.get(name).map(|&i| self.columns[i].as_slice())
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// `(name, values)` pairs in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.names
            .iter()
            .zip(&self.columns)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
