//! CausalTree: entry point tying validation, search, scoring, and pruning
//! together over one input table.

use rayon::prelude::*;
use relata_core::errors::{LookupError, RelataResult};
use relata_core::{
    discovery_build_span, significance_span, CausalRelation, Discovery, DiscoveryConfig,
    IDiscoveryObserver, ScoredCause, TimeSeriesTable, TypeLevelCause, VariableIndex,
    VariableStore, Window,
};

use crate::observer::TracingObserver;
use crate::significance::{self, Contrast};
use crate::{evidence, predicates, pruning, search, validation, windows};

/// The discovery engine.
///
/// Owns the validated table and the variable registry. Every discovery
/// operation returns fresh results and leaves the engine unchanged.
pub struct CausalTree {
    table: TimeSeriesTable,
    store: VariableStore,
    config: DiscoveryConfig,
    observer: Box<dyn IDiscoveryObserver>,
}

impl CausalTree {
    /// Validate the table and register `cause_names` then `effect_name`.
    pub fn new(
        table: TimeSeriesTable,
        cause_names: &[&str],
        effect_name: &str,
    ) -> RelataResult<Self> {
        Self::with_config(table, cause_names, effect_name, DiscoveryConfig::default())
    }

    pub fn with_config(
        table: TimeSeriesTable,
        cause_names: &[&str],
        effect_name: &str,
        config: DiscoveryConfig,
    ) -> RelataResult<Self> {
        validation::validate(&table, cause_names, effect_name)?;

        let mut store = VariableStore::new();
        for &name in cause_names.iter().chain(std::iter::once(&effect_name)) {
            // A name listed as both a cause and the effect is registered once.
            if !store.contains(name) {
                store.add(name)?;
            }
        }

        let observer = Box::new(TracingObserver::new(config.verbose));
        Ok(Self {
            table,
            store,
            config,
            observer,
        })
    }

    /// Replace the default tracing observer.
    pub fn with_observer(mut self, observer: impl IDiscoveryObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn table(&self) -> &TimeSeriesTable {
        &self.table
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn num_time_steps(&self) -> usize {
        self.table.num_time_steps()
    }

    pub fn variable_name(&self, index: VariableIndex) -> RelataResult<&str> {
        self.store.lookup_by_index(index)
    }

    pub fn variable_index(&self, name: &str) -> RelataResult<VariableIndex> {
        self.store.lookup_by_name(name)
    }

    pub fn relation(&self, cause: &str, effect: &str) -> RelataResult<CausalRelation> {
        Ok(CausalRelation::new(
            self.store.lookup_by_name(cause)?,
            self.store.lookup_by_name(effect)?,
        ))
    }

    /// Human-readable form, e.g. `smoke => fire in [1, 2]`.
    pub fn describe(&self, cause: &TypeLevelCause) -> RelataResult<String> {
        Ok(format!(
            "{} => {} in {}",
            self.variable_name(cause.relation.cause)?,
            self.variable_name(cause.relation.effect)?,
            cause.window
        ))
    }

    pub fn cause_holds_at(&self, t: usize, cause: VariableIndex) -> RelataResult<bool> {
        Ok(predicates::cause_holds_at(self.column(cause)?, t))
    }

    /// `window` is in absolute time.
    pub fn effect_holds_in(&self, window: Window, effect: VariableIndex) -> RelataResult<bool> {
        Ok(predicates::effect_holds_in(self.column(effect)?, window))
    }

    pub fn c_leadsto_e_in(
        &self,
        window: Window,
        relation: CausalRelation,
        t: usize,
    ) -> RelataResult<usize> {
        let (cause, effect) = self.columns(relation)?;
        Ok(predicates::c_leadsto_e_in(cause, effect, window, t))
    }

    pub fn token_effect_times(
        &self,
        relation: CausalRelation,
        window: Window,
        t: usize,
    ) -> RelataResult<Vec<usize>> {
        let (cause, effect) = self.columns(relation)?;
        Ok(evidence::token_effect_times(cause, effect, window, t))
    }

    pub fn identify_potential_cause(
        &self,
        relation: CausalRelation,
        window: Window,
    ) -> RelataResult<Option<TypeLevelCause>> {
        let (cause, effect) = self.columns(relation)?;
        Ok(search::identify_potential_cause(relation, cause, effect, window))
    }

    /// Search every registered variable other than `effect` over every window
    /// up to `max_lag`. Results are cause-major, then window-major.
    pub fn build(&self, effect: &str, max_lag: usize) -> RelataResult<Discovery> {
        let _span = discovery_build_span!(effect, max_lag).entered();

        let effect_index = self.store.lookup_by_name(effect)?;
        let effect_column = self.column(effect_index)?;

        let windows = windows::enumerate(max_lag);
        self.observer.on_windows_created(&windows);

        let mut causes = Vec::new();
        for (cause_index, cause_name) in self.store.iter() {
            if cause_index == effect_index {
                continue;
            }
            self.observer.on_cause_search_started(cause_name, effect);

            let relation = CausalRelation::new(cause_index, effect_index);
            let cause_column = self.column(cause_index)?;
            let found = self.search_windows(relation, cause_column, effect_column, &windows);

            let token_events: usize = found.iter().map(TypeLevelCause::token_count).sum();
            self.observer
                .on_cause_search_finished(cause_name, effect, found.len(), token_events);
            causes.extend(found);
        }

        Ok(Discovery::new(max_lag, causes))
    }

    /// Score every cause in `discovery`, in order.
    pub fn compute_significance(&self, discovery: &Discovery) -> RelataResult<Vec<ScoredCause>> {
        let _span = significance_span!(discovery.len()).entered();

        if self.config.parallel {
            discovery
                .causes
                .par_iter()
                .map(|cause| self.score_cause(discovery, cause))
                .collect()
        } else {
            discovery
                .causes
                .iter()
                .map(|cause| self.score_cause(discovery, cause))
                .collect()
        }
    }

    /// Keep only candidates whose score sums to a positive value.
    pub fn prune(&self, mut scored: Vec<ScoredCause>) -> Vec<ScoredCause> {
        let result = pruning::prune_in_place(&mut scored);
        self.observer.on_pruned(&scored, result.removed);
        scored
    }

    /// Build with the configured `max_lag`, score, and prune.
    pub fn discover(&self, effect: &str) -> RelataResult<Vec<ScoredCause>> {
        let discovery = self.build(effect, self.config.max_lag)?;
        let scored = self.compute_significance(&discovery)?;
        Ok(self.prune(scored))
    }

    fn score_cause(
        &self,
        discovery: &Discovery,
        cause: &TypeLevelCause,
    ) -> RelataResult<ScoredCause> {
        let (cause_column, effect_column) = self.columns(cause.relation)?;
        let contrast = Contrast {
            cause: cause_column,
            effect: effect_column,
            window: cause.window,
            max_lag: discovery.max_lag,
        };
        let co_occurring = discovery
            .co_occurring(cause)
            .map(|x| self.column(x.relation.cause))
            .collect::<RelataResult<Vec<_>>>()?;

        let score = significance::score(&contrast, &co_occurring, self.config.lone_candidate);
        self.observer
            .on_significance_computed(cause, &score, co_occurring.len());
        Ok(ScoredCause::new(cause.clone(), score))
    }

    fn search_windows(
        &self,
        relation: CausalRelation,
        cause: &[i64],
        effect: &[i64],
        windows: &[Window],
    ) -> Vec<TypeLevelCause> {
        if self.config.parallel {
            windows
                .par_iter()
                .filter_map(|&w| search::identify_potential_cause(relation, cause, effect, w))
                .collect()
        } else {
            windows
                .iter()
                .filter_map(|&w| search::identify_potential_cause(relation, cause, effect, w))
                .collect()
        }
    }

    fn column(&self, index: VariableIndex) -> RelataResult<&[i64]> {
        let name = self.store.lookup_by_index(index)?;
        self.table.column(name).ok_or_else(|| {
            LookupError::NameNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn columns(&self, relation: CausalRelation) -> RelataResult<(&[i64], &[i64])> {
        Ok((self.column(relation.cause)?, self.column(relation.effect)?))
    }
}
