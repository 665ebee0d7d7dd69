//! View state of the report table.
//!
//! Two fields carry what the user sees: `records` and `error`. Both start
//! empty at mount and are written only by the outcome of the mount's single
//! request. There is no loading flag: until the response arrives, the empty
//! table is shown.

use common::model::report::Report;

use super::fetch::{FetchError, FetchScope};

pub struct ReportTableComponent {
    /// Reports in the order the backend returned them. Replaced wholesale.
    pub records: Vec<Report>,

    /// Set when the request failed. While set, the table is hidden even if
    /// `records` still holds an earlier listing.
    pub error: Option<FetchError>,

    /// Guard so the request is issued on the first render only.
    pub loaded: bool,

    /// The request in flight, if any. Released once its outcome is applied,
    /// or cancelled when the component is destroyed.
    pub fetch: Option<FetchScope>,
}

impl ReportTableComponent {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
            loaded: false,
            fetch: None,
        }
    }

    /// Routes a request outcome into the view state.
    ///
    /// - `Ok`: records are replaced and the error is cleared.
    /// - `Err`: the error is stored; records are left untouched.
    pub fn apply_outcome(&mut self, outcome: Result<Vec<Report>, FetchError>) {
        if let Some(scope) = self.fetch.take() {
            scope.complete();
        }
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Cancels the request still in flight, if any. Its outcome will not be
    /// delivered.
    pub fn teardown(&mut self) {
        if let Some(mut scope) = self.fetch.take() {
            scope.cancel();
        }
    }
}

impl Default for ReportTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn report(id: i64, description: &str) -> Report {
        Report {
            id,
            description: description.to_string(),
            fecha: "2024-01-01".to_string(),
            image_path: None,
            location: "19.43,-99.13".to_string(),
        }
    }

    #[test]
    fn starts_empty_without_error() {
        let state = ReportTableComponent::new();
        assert!(state.records.is_empty());
        assert!(state.error.is_none());
        assert!(!state.loaded);
        assert!(state.fetch.is_none());
    }

    #[test]
    fn success_replaces_records_wholesale() {
        let mut state = ReportTableComponent::new();
        state.records = vec![report(9, "old"), report(10, "older")];

        state.apply_outcome(Ok(vec![report(1, "Pothole")]));

        assert_eq!(state.records, vec![report(1, "Pothole")]);
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_keeps_stale_records() {
        let mut state = ReportTableComponent::new();
        state.records = vec![report(1, "Pothole")];

        state.apply_outcome(Err(FetchError::Http(500)));

        assert_eq!(state.error, Some(FetchError::Http(500)));
        assert_eq!(state.records, vec![report(1, "Pothole")]);
    }

    #[test]
    fn success_clears_previous_error() {
        let mut state = ReportTableComponent::new();
        state.apply_outcome(Err(FetchError::Network("offline".into())));

        state.apply_outcome(Ok(Vec::new()));

        assert!(state.error.is_none());
        assert!(state.records.is_empty());
    }

    #[test]
    fn teardown_before_response_leaves_state_untouched() {
        let aborted = Rc::new(Cell::new(false));
        let flag = aborted.clone();
        let mut state = ReportTableComponent::new();
        state.fetch = Some(FetchScope::with_abort(None, move || flag.set(true)));
        let handle = state.fetch.as_ref().unwrap().handle();

        state.teardown();

        assert!(aborted.get());
        assert!(state.fetch.is_none());
        let delivered = handle.deliver(Ok(vec![report(1, "late")]), |outcome| {
            state.apply_outcome(outcome)
        });
        assert!(!delivered);
        assert!(state.records.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn applying_outcome_releases_scope_without_abort() {
        let aborted = Rc::new(Cell::new(false));
        let flag = aborted.clone();
        let mut state = ReportTableComponent::new();
        state.fetch = Some(FetchScope::with_abort(None, move || flag.set(true)));
        let handle = state.fetch.as_ref().unwrap().handle();

        state.apply_outcome(Ok(vec![report(1, "Pothole")]));

        assert!(state.fetch.is_none());
        assert!(!aborted.get());
        assert!(!handle.is_alive());
    }
}
