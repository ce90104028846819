//! Per-view fetch lifecycle: the loader state machine.

use crate::error::FetchError;
use crate::query::ViewQuery;

/// Lifecycle state of one visualization's data.
///
/// Replaced wholesale on every transition, never partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// No query issued yet.
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

/// State machine for one visualization's fetch lifecycle.
///
/// Owns the current [`ViewState`], the query that produced it, and a
/// generation token used to discard stale responses: within one loader
/// a later-issued query's result always wins, regardless of network
/// completion order. Loaders never render; the shell observes the state
/// through whatever cell holds the loader.
#[derive(Debug)]
pub struct ViewLoader<T> {
    state: ViewState<T>,
    query: Option<ViewQuery>,
    generation: u64,
}

impl<T> ViewLoader<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            query: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// The query behind the current state, in-flight or completed.
    pub fn query(&self) -> Option<&ViewQuery> {
        self.query.as_ref()
    }

    /// Start loading `query`.
    ///
    /// Returns the token the caller must present to [`ViewLoader::finish`]
    /// once the request completes, or `None` when `query` equals the
    /// in-flight or last-completed query: no duplicate fetch is issued,
    /// and a `Failed` state is not retried until the query changes.
    pub fn begin(&mut self, query: ViewQuery) -> Option<u64> {
        if self.query.as_ref() == Some(&query) {
            return None;
        }
        log::debug!("issuing {}", query.url());
        self.query = Some(query);
        self.generation += 1;
        self.state = ViewState::Loading;
        Some(self.generation)
    }

    /// Complete the request identified by `token`.
    ///
    /// A stale token (superseded by a newer [`ViewLoader::begin`]) is
    /// discarded and the current state is left untouched. Returns
    /// whether the result was applied.
    pub fn finish(&mut self, token: u64, result: Result<T, FetchError>) -> bool {
        if token != self.generation {
            log::debug!(
                "discarding stale response (token {token}, current {})",
                self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(data) => ViewState::Ready(data),
            Err(err) => ViewState::Failed(err.to_string()),
        };
        true
    }
}

impl<T> Default for ViewLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterPatch, FilterState};
    use crate::query::{build, ViewKind};

    fn data_query(filters: &FilterState) -> ViewQuery {
        build(ViewKind::TimeSeries, filters)
    }

    #[test]
    fn starts_idle_and_loads_on_first_query() {
        let mut loader: ViewLoader<Vec<f64>> = ViewLoader::new();
        assert_eq!(loader.state(), &ViewState::Idle);

        let token = loader.begin(data_query(&FilterState::default()));
        assert!(token.is_some());
        assert_eq!(loader.state(), &ViewState::Loading);
    }

    #[test]
    fn equal_query_is_a_no_op() {
        let mut loader: ViewLoader<Vec<f64>> = ViewLoader::new();
        let filters = FilterState::default();

        let token = loader.begin(data_query(&filters)).unwrap();
        assert_eq!(loader.begin(data_query(&filters)), None);

        assert!(loader.finish(token, Ok(vec![1.0])));
        assert_eq!(loader.state(), &ViewState::Ready(vec![1.0]));

        // Completed state for the same query is not refetched either.
        assert_eq!(loader.begin(data_query(&filters)), None);
    }

    #[test]
    fn stale_response_never_overwrites_newer_state() {
        let mut loader: ViewLoader<Vec<f64>> = ViewLoader::new();
        let mut filters = FilterState::default();

        let token_a = loader.begin(data_query(&filters)).unwrap();
        filters.apply(FilterPatch::region("Central"));
        let token_b = loader.begin(data_query(&filters)).unwrap();

        // B resolves first, then A's late response arrives.
        assert!(loader.finish(token_b, Ok(vec![2.0])));
        assert!(!loader.finish(token_a, Ok(vec![1.0])));
        assert_eq!(loader.state(), &ViewState::Ready(vec![2.0]));
    }

    #[test]
    fn failure_sticks_until_the_query_changes() {
        let mut loader: ViewLoader<Vec<f64>> = ViewLoader::new();
        let mut filters = FilterState::default();

        let token = loader.begin(data_query(&filters)).unwrap();
        assert!(loader.finish(
            token,
            Err(FetchError::Backend("no data".to_string()))
        ));
        assert_eq!(loader.state(), &ViewState::Failed("no data".to_string()));

        // No automatic retry for the same query.
        assert_eq!(loader.begin(data_query(&filters)), None);

        // A differing query is the retry trigger.
        filters.apply(FilterPatch::region("Eastern"));
        assert!(loader.begin(data_query(&filters)).is_some());
    }

    #[test]
    fn forecast_steps_change_retriggers_only_the_forecast_loader() {
        let mut filters = FilterState::default();
        let mut time_series: ViewLoader<()> = ViewLoader::new();
        let mut forecast: ViewLoader<()> = ViewLoader::new();
        let mut heatmap: ViewLoader<()> = ViewLoader::new();

        time_series.begin(build(ViewKind::TimeSeries, &filters));
        forecast.begin(build(ViewKind::Forecast, &filters));
        heatmap.begin(build(ViewKind::Heatmap, &filters));

        filters.apply(FilterPatch::forecast_steps(6));

        assert_eq!(time_series.begin(build(ViewKind::TimeSeries, &filters)), None);
        assert_eq!(heatmap.begin(build(ViewKind::Heatmap, &filters)), None);
        assert!(forecast.begin(build(ViewKind::Forecast, &filters)).is_some());
    }
}
