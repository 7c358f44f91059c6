//! Shared filtering primitives
//!
//! The month predicate, the categorical "all" sentinel, and the free-text
//! search predicate every page combines the same way: a record is displayed
//! iff it matches the selected month AND every active categorical selection
//! AND the search text.

use crate::models::{DatedRecord, SchoolMonth};

/// Selection state of a categorical filter
///
/// `All` is the vacuously-true sentinel; `Only` requires exact,
/// case-sensitive equality with the record's field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

// Manual impl so `Selection<T>: Default` does not require `T: Default`
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Check whether a field value passes this selection
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Whether this selection restricts anything
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Check an optional field; a missing field only passes `All`
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Self::All, _) => true,
            (Self::Only(wanted), Some(v)) => wanted == v,
            (Self::Only(_), None) => false,
        }
    }
}

/// Check a record against a free-text search string
///
/// An empty query matches everything. Otherwise the lower-cased query must
/// appear as a substring of at least one of the record's search haystacks
/// (case-insensitive, OR across fields).
pub fn matches_search<R: DatedRecord>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    record
        .search_haystacks()
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// Count the records falling in a month
pub fn month_total<R: DatedRecord>(records: &[R], month: SchoolMonth) -> usize {
    records.iter().filter(|r| r.in_month(month)).count()
}

/// The distinct years present in a collection, newest first
pub fn available_years<R: DatedRecord>(records: &[R]) -> Vec<i32> {
    let mut years: Vec<i32> = records
        .iter()
        .map(|r| chrono::Datelike::year(&r.occurs_on()))
        .collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

/// The filtered rows and month summary a page renders
///
/// `month_total` counts every record in the selected month, before the
/// categorical and search predicates narrow the displayed rows; the summary
/// is likewise computed over the whole month, so "Showing X of Y" stays
/// honest while filters are active.
#[derive(Debug, Clone)]
pub struct MonthView<R, S> {
    /// Records to display, in the kind's display order
    pub rows: Vec<R>,

    /// Month-scoped summary statistics
    pub summary: S,

    /// Total records in the month before categorical/search narrowing
    pub month_total: usize,
}

impl<R, S> MonthView<R, S> {
    /// Whether the filtered view has nothing to display
    ///
    /// Zero matches is an empty state, not an error.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
