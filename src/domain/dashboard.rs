// src/domain/dashboard.rs

use crate::domain::filter::{matching_positions, FilterState, FilterUpdate};
use crate::domain::record::{PropertyRecord, RecordStore};
use crate::domain::stats::Summary;
use crate::domain::trends::TrendPoint;
use crate::domain::view::ViewMode;

/// Filtered records and their aggregates for one filter state.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub records: Vec<&'a PropertyRecord>,
    pub summary: Summary,
}

#[derive(Debug, Clone)]
struct Derived {
    key: FilterState,
    // Positions into the record store, in store order.
    positions: Vec<usize>,
    summary: Summary,
}

/// Per-session dashboard state: filter, view, trend series and a
/// derived-data cache keyed by the filter state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    filter: FilterState,
    view: ViewMode,
    trends: Vec<TrendPoint>,
    derived: Option<Derived>,
    recomputations: u64,
}

impl Dashboard {
    pub fn new(trends: Vec<TrendPoint>) -> Self {
        Self {
            filter: FilterState::default(),
            view: ViewMode::default(),
            trends,
            derived: None,
            recomputations: 0,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn trends(&self) -> &[TrendPoint] {
        &self.trends
    }

    /// How many times the filter/aggregate pipeline has actually run.
    #[cfg(test)]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn apply(&mut self, update: FilterUpdate) {
        self.filter.apply(update);
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Only the view mode changes; the filter and the cache are left alone.
    pub fn select_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn snapshot<'a>(&mut self, store: &'a RecordStore) -> Snapshot<'a> {
        if self.derived.as_ref().is_some_and(|d| d.key != self.filter) {
            self.derived = None;
        }

        let filter = &self.filter;
        let recomputations = &mut self.recomputations;
        let derived = self.derived.get_or_insert_with(|| {
            *recomputations += 1;
            derive(store, filter)
        });

        Snapshot {
            records: store.select(&derived.positions),
            summary: derived.summary.clone(),
        }
    }
}

fn derive(store: &RecordStore, filter: &FilterState) -> Derived {
    let positions = matching_positions(store.records(), filter);

    Derived {
        key: filter.clone(),
        summary: Summary::from_records(&store.select(&positions)),
        positions,
    }
}
