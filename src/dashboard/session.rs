use crate::dashboard::presenter::Presenter;
use crate::dashboard::view::DashboardView;
use crate::error::{DashboardError, Result};
use crate::models::{Dataset, DateRange, FilteredView};
use crate::processors::RangeFilter;

/// The session only ever rests in `Idle`; every event is handled to
/// completion before `handle` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    RangeChanged(DateRange),
}

/// One user's dashboard: the loaded tables, the active range and the view
/// computed for it. Sessions share nothing, so several can coexist.
pub struct DashboardSession {
    dataset: Dataset,
    filter: RangeFilter,
    presenter: Presenter,
    state: SessionState,
    selection: FilteredView,
    view: DashboardView,
    recomputations: u64,
}

impl DashboardSession {
    /// Open a session over the full dataset span.
    pub fn open(dataset: Dataset, presenter: Presenter) -> Result<Self> {
        let filter = RangeFilter::for_dataset(&dataset).ok_or(DashboardError::EmptyDataset)?;
        let selection = filter.apply(&dataset, filter.bounds());
        let view = presenter.present(&selection);

        tracing::debug!(range = %filter.bounds(), "Opened dashboard session");

        Ok(Self {
            dataset,
            filter,
            presenter,
            state: SessionState::Idle,
            selection,
            view,
            recomputations: 1,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bounds(&self) -> DateRange {
        self.filter.bounds()
    }

    pub fn active_range(&self) -> DateRange {
        self.selection.range
    }

    pub fn selection(&self) -> &FilteredView {
        &self.selection
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of full filter/aggregate/present passes so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn handle(&mut self, event: SessionEvent) -> &DashboardView {
        match (self.state, event) {
            (SessionState::Idle, SessionEvent::RangeChanged(requested)) => {
                let range = self.resolve_range(requested);
                self.recompute(range);
                self.state = SessionState::Idle;
            }
        }
        &self.view
    }

    pub fn set_range(&mut self, range: DateRange) -> &DashboardView {
        self.handle(SessionEvent::RangeChanged(range))
    }

    fn resolve_range(&self, requested: DateRange) -> DateRange {
        match self.filter.check(requested) {
            Ok(()) => requested,
            Err(e) => {
                let clamped = self.filter.clamp(requested);
                tracing::warn!("{}; using {}", e, clamped);
                clamped
            }
        }
    }

    fn recompute(&mut self, range: DateRange) {
        self.selection = self.filter.apply(&self.dataset, range);
        self.view = self.presenter.present(&self.selection);
        self.recomputations += 1;

        tracing::debug!(
            %range,
            hourly = self.selection.hourly.len(),
            daily = self.selection.daily.len(),
            "Recomputed dashboard"
        );
    }
}
