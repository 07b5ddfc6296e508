//! Cancellation-safe fetch coordination for one listing view.
//!
//! Every request gets a [`RequestToken`]. Issuing a new request aborts the live
//! one before the new transport call starts, and a completion is only applied
//! while its token is still current. The token check and the state mutation
//! happen under the same lock, so a completion can never interleave with an
//! issuance.

use std::future::Future;
use std::sync::Arc;

use futures_util::future::{AbortHandle, AbortRegistration, Abortable};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::filter_set::FilterSet;
use crate::listing::reconcile::reconcile;
use crate::listing::view_state::ListingState;
use crate::query_string::QueryString;
use crate::url_codec::request_query;

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below HTTP. Cancellation is not one of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Performs `GET /hotels` with the given query parameters.
///
/// Dropping the returned future must release the underlying connection.
pub trait HotelsFetcher {
    fn fetch_hotels(&self, query: &QueryString) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What happened to a request once it finished.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The request was current; the state after applying it.
    Applied(ListingState),
    /// Superseded, torn down or aborted. Nothing changed.
    Discarded,
}

/// An issued request that has not been sent yet.
#[derive(Debug)]
pub struct PendingRequest {
    token: RequestToken,
    query: QueryString,
    registration: AbortRegistration,
}

impl PendingRequest {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn query(&self) -> &QueryString {
        &self.query
    }
}

struct LiveRequest {
    token: RequestToken,
    abort: AbortHandle,
}

#[derive(Default)]
struct CoordinatorState {
    last_token: u64,
    live: Option<LiveRequest>,
    listing: ListingState,
}

pub struct RequestCoordinator<F> {
    fetcher: Arc<F>,
    state: Arc<Mutex<CoordinatorState>>,
}

impl<F> Clone for RequestCoordinator<F> {
    fn clone(&self) -> Self {
        Self { fetcher: self.fetcher.clone(), state: self.state.clone() }
    }
}

impl<F: HotelsFetcher> RequestCoordinator<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher: Arc::new(fetcher), state: Arc::new(Mutex::new(CoordinatorState::default())) }
    }

    /// Supersedes the live request, clears the previous cycle's errors and marks
    /// the view as loading.
    pub fn issue(&self, filters: &FilterSet) -> PendingRequest {
        let mut state = self.state.lock();
        state.last_token += 1;
        let token = RequestToken(state.last_token);
        if let Some(previous) = state.live.take() {
            debug!("request {:?} superseded by {:?}", previous.token, token);
            previous.abort.abort();
        }
        let (abort, registration) = AbortHandle::new_pair();
        state.live = Some(LiveRequest { token, abort });
        state.listing.begin_cycle();

        let query = request_query(filters);
        debug!("issuing request {:?} with query {:?}", token, query.to_string());
        PendingRequest { token, query, registration }
    }

    /// Sends an issued request and applies its result if it is still current.
    pub async fn run(&self, pending: PendingRequest) -> FetchOutcome {
        let PendingRequest { token, query, registration } = pending;
        let fetch = self.fetcher.fetch_hotels(&query);
        match Abortable::new(fetch, registration).await {
            Ok(result) => self.complete(token, result),
            Err(_aborted) => {
                debug!("request {:?} aborted", token);
                FetchOutcome::Discarded
            }
        }
    }

    pub async fn fetch(&self, filters: &FilterSet) -> FetchOutcome {
        let pending = self.issue(filters);
        self.run(pending).await
    }

    /// Applies a finished request, or drops it silently when it is no longer current.
    pub fn complete(&self, token: RequestToken, result: Result<RawResponse, TransportError>) -> FetchOutcome {
        let mut state = self.state.lock();
        let is_current = state.live.as_ref().is_some_and(|live| live.token == token);
        if !is_current {
            debug!("discarding stale response for {:?}", token);
            return FetchOutcome::Discarded;
        }
        state.live = None;
        state.listing.loading = false;
        state.listing.apply(reconcile(result));
        FetchOutcome::Applied(state.listing.clone())
    }

    /// The view is going away: the live request is aborted and nothing it
    /// returns will be applied.
    pub fn teardown(&self) {
        if let Some(live) = self.state.lock().live.take() {
            debug!("tearing down live request {:?}", live.token);
            live.abort.abort();
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.state.lock().live.as_ref().is_some_and(|live| live.token == token)
    }

    pub fn state(&self) -> ListingState {
        self.state.lock().listing.clone()
    }
}
