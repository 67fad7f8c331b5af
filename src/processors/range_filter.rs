use crate::error::{DashboardError, Result};
use crate::models::{Dataset, DateRange, FilteredView};

/// Selects the rows of both tables that fall inside an inclusive date range.
///
/// `bounds` is the span the date-range control is allowed to cover.
#[derive(Debug, Clone, Copy)]
pub struct RangeFilter {
    bounds: DateRange,
}

impl RangeFilter {
    pub fn new(bounds: DateRange) -> Self {
        Self { bounds }
    }

    /// Filter bounded by the daily table's span. `None` for an empty dataset.
    pub fn for_dataset(dataset: &Dataset) -> Option<Self> {
        dataset.date_span().map(Self::new)
    }

    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    /// Reject a non-empty range that reaches outside the bounds.
    pub fn check(&self, range: DateRange) -> Result<()> {
        if range.is_empty() || self.bounds.covers(&range) {
            return Ok(());
        }

        Err(DashboardError::Range {
            start: range.start,
            end: range.end,
            min: self.bounds.start,
            max: self.bounds.end,
        })
    }

    /// Pull the range inside the bounds. A range that misses the bounds
    /// entirely stays empty.
    pub fn clamp(&self, range: DateRange) -> DateRange {
        if range.is_empty() {
            return range;
        }
        range.intersect(&self.bounds)
    }

    pub fn apply(&self, dataset: &Dataset, range: DateRange) -> FilteredView {
        if range.is_empty() {
            return FilteredView::empty(range);
        }

        let hourly = dataset
            .hourly
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect();
        let daily = dataset
            .daily
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect();

        FilteredView {
            range,
            hourly,
            daily,
        }
    }
}
