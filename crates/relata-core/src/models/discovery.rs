use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{TypeLevelCause, Window};

/// The type-level causes found by one `build`, in cause-major then
/// window-major order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Discovery {
    /// Score vectors computed from this discovery cover lags `0..=max_lag`.
    pub max_lag: usize,
    pub causes: Vec<TypeLevelCause>,
}

impl Discovery {
    pub fn new(max_lag: usize, causes: Vec<TypeLevelCause>) -> Self {
        Self { max_lag, causes }
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    /// Causes whose window equals `window`.
    pub fn in_window(&self, window: Window) -> impl Iterator<Item = &TypeLevelCause> {
        self.causes.iter().filter(move |c| c.window == window)
    }

    /// Causes sharing `cause`'s window, excluding `cause` itself.
    pub fn co_occurring<'a>(
        &'a self,
        cause: &'a TypeLevelCause,
    ) -> impl Iterator<Item = &'a TypeLevelCause> {
        self.in_window(cause.window)
            .filter(move |other| other.key() != cause.key())
    }

    /// Total token events across every cause.
    pub fn token_count(&self) -> usize {
        self.causes.iter().map(TypeLevelCause::token_count).sum()
    }

    /// Append the causes of `other` that are not already present.
    /// Keeps the larger `max_lag`.
    pub fn merge(&mut self, other: Discovery) {
        self.max_lag = self.max_lag.max(other.max_lag);
        let mut seen: HashSet<_> = self.causes.iter().map(TypeLevelCause::key).collect();
        for cause in other.causes {
            if seen.insert(cause.key()) {
                self.causes.push(cause);
            }
        }
    }
}
