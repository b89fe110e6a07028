//! Types for resolved filter state

use chrono::NaiveDateTime;
use crate::query::{ChartRequestFilter, Variables};
use crate::time::{CalendarRanges, TimeRangeConverter};

/// What value resolution needs from the outside world: the current moment
/// and a way to expand named ranges.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub now: NaiveDateTime,
    pub time_ranges: &'a dyn TimeRangeConverter,
}

impl<'a> ResolveContext<'a> {
    /// Context using calendar-aligned named ranges
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now, time_ranges: &CalendarRanges }
    }

    pub fn with_time_ranges(self, time_ranges: &'a dyn TimeRangeConverter) -> Self {
        Self { time_ranges, ..self }
    }
}

impl std::fmt::Debug for ResolveContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveContext").field("now", &self.now).finish_non_exhaustive()
    }
}

/// Everything the board's filter widgets contribute to one chart widget
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedFilters {
    /// Field filters, in filter-widget order
    pub filters: Vec<ChartRequestFilter>,
    /// At least one contributing filter replaces the chart's own filters
    pub covered: bool,
    /// Variable substitutions keyed by variable name
    pub variables: Variables,
}

/// How a Variable filter combines with earlier values for the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VariablePolicy {
    /// String variables: append, duplicates kept
    Accumulate,
    /// Any other type: keep only the first resolved value, dropping earlier ones
    Replace,
}

/// The effect of one applicable filter widget
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Effect {
    Field(ChartRequestFilter),
    Variable {
        key: String,
        values: Vec<String>,
        policy: VariablePolicy,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Contribution {
    pub covered: bool,
    pub effect: Effect,
}
