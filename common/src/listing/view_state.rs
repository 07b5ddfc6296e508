//! State rendered by the hotel listing view.

use crate::filter_set::FieldErrors;
use crate::hotel::Hotel;

/// At most one error channel is populated at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ErrorChannel {
    #[default]
    None,
    /// Server-reported failures attached to form inputs.
    Fields(FieldErrors),
    /// Page-level banner.
    Operational(String),
}

/// Result of one applied fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Success(Vec<Hotel>),
    FieldErrors(FieldErrors),
    Operational(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    pub loading: bool,
    pub hotels: Vec<Hotel>,
    pub errors: ErrorChannel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a [Hotel]),
}

impl ListingState {
    /// Loading wins over a stale error or a stale result list.
    pub fn view(&self) -> ViewState<'_> {
        if self.loading {
            return ViewState::Loading;
        }
        if let Some(message) = self.operational_error() {
            return ViewState::Error(message);
        }
        if self.hotels.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Populated(&self.hotels)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.view(), ViewState::Empty)
    }

    pub fn operational_error(&self) -> Option<&str> {
        match &self.errors {
            ErrorChannel::Operational(message) => Some(message),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match &self.errors {
            ErrorChannel::Fields(errors) => Some(errors),
            _ => None,
        }
    }

    /// A new request was issued: errors clear now, not when it completes.
    pub(crate) fn begin_cycle(&mut self) {
        self.loading = true;
        self.errors = ErrorChannel::None;
    }

    pub(crate) fn apply(&mut self, outcome: CycleOutcome) {
        self.loading = false;
        match outcome {
            CycleOutcome::Success(hotels) => {
                self.hotels = hotels;
                self.errors = ErrorChannel::None;
            }
            CycleOutcome::FieldErrors(errors) => {
                self.hotels.clear();
                self.errors = ErrorChannel::Fields(errors);
            }
            CycleOutcome::Operational(message) => {
                self.hotels.clear();
                self.errors = ErrorChannel::Operational(message);
            }
        }
    }
}
