use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{InputError, LookupError, RelataResult};

/// Identifier assigned to a variable on registration. Stable for the
/// lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableIndex(pub usize);

impl VariableIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for VariableIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registry of variable names. Each registered name maps to exactly one
/// index and vice versa.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    names: Vec<String>,
    by_name: HashMap<String, VariableIndex>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` under the next unused index.
    pub fn add(&mut self, name: &str) -> RelataResult<VariableIndex> {
        if self.by_name.contains_key(name) {
            return Err(InputError::DuplicateVariable {
                name: name.to_string(),
            }
            .into());
        }
        let index = VariableIndex(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), index);
        Ok(index)
    }

    pub fn lookup_by_name(&self, name: &str) -> RelataResult<VariableIndex> {
        self.by_name.get(name).copied().ok_or_else(|| {
            LookupError::NameNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn lookup_by_index(&self, index: VariableIndex) -> RelataResult<&str> {
        self.names
            .get(index.0)
            .map(String::as_str)
            .ok_or_else(|| LookupError::IndexNotFound { index: index.0 }.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `(index, name)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableIndex, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (VariableIndex(i), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
