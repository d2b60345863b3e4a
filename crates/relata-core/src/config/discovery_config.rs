use serde::{Deserialize, Serialize};

use super::defaults;

/// How to score a type-level cause that shares its window with no other
/// candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoneCandidatePolicy {
    /// All-zero score; `prune` then removes the candidate.
    #[default]
    Zero,
    /// Contrast `P(e | c)` against `P(e | not c)` with no co-occurring condition.
    Unconditioned,
}

/// Discovery parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Largest lag offset a window may reach.
    pub max_lag: usize,
    /// Narrate individual windows and candidates. Never changes results.
    pub verbose: bool,
    /// Fan the (cause, window) search and significance scoring out over rayon.
    pub parallel: bool,
    /// Fallback for a candidate with an empty co-occurring set.
    pub lone_candidate: LoneCandidatePolicy,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_lag: defaults::DEFAULT_MAX_LAG,
            verbose: defaults::DEFAULT_VERBOSE,
            parallel: defaults::DEFAULT_PARALLEL,
            lone_candidate: LoneCandidatePolicy::default(),
        }
    }
}

impl DiscoveryConfig {
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_lone_candidate(mut self, policy: LoneCandidatePolicy) -> Self {
        self.lone_candidate = policy;
        self
    }
}
