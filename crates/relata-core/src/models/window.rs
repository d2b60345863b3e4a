use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// An inclusive interval `[start, end]`.
///
/// As a lag window it holds offsets relative to a cause time step; translated
/// with [`Window::translate`] it holds absolute time steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    pub fn span(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Shift the window to absolute time, anchored at `t`.
    pub fn translate(&self, t: usize) -> Window {
        Window::new(t + self.start, t + self.end)
    }

    /// Clip the upper bound to `last`. `None` if nothing remains.
    pub fn clip(&self, last: usize) -> Option<Window> {
        if self.start > last {
            None
        } else {
            Some(Window::new(self.start, self.end.min(last)))
        }
    }

    pub fn contains(&self, value: usize) -> bool {
        (self.start..=self.end).contains(&value)
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
