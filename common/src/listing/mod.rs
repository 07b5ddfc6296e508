//! Query-state synchronization for the hotel listing view.
//!
//! The URL decodes into a [`FilterSet`](crate::filter_set::FilterSet), the
//! [`RequestCoordinator`] fetches it, and the finished request is reconciled
//! into the [`ListingState`] the view renders.

pub mod coordinator;
pub mod reconcile;
pub mod response;
pub mod view_state;

pub use coordinator::{FetchOutcome, HotelsFetcher, PendingRequest, RawResponse, RequestCoordinator, RequestToken, TransportError};
pub use view_state::{CycleOutcome, ErrorChannel, ListingState, ViewState};
