//! Result area of the hotel listing: loading, error banner, empty or the list.

use dioxus::prelude::*;
use common::listing::{ListingState, ViewState};

use crate::components::{
    error_boundary::ErrorBanner,
    hotel_components::hotel_card::HotelCard,
    status_views::{EmptyState, LoadingIndicator},
};

#[component]
pub fn HotelResultList(listing: ReadSignal<ListingState>) -> Element {
    let listing = listing.read();
    match listing.view() {
        ViewState::Loading => rsx! { LoadingIndicator {} },
        ViewState::Error(message) => rsx! { ErrorBanner { message: message.to_string() } },
        ViewState::Empty => rsx! { EmptyState {} },
        ViewState::Populated(hotels) => {
            let items: Vec<_> = hotels
                .iter()
                .enumerate()
                .map(|(position, hotel)| (hotel.key(position).to_string(), hotel.clone()))
                .collect();
            rsx! {
                ul {
                    id: "x-hotel-results-wrapper",
                    style: "
                        width: 100%;
                        height: 100%;
                        overflow-y: auto;
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    ",
                    for (key, hotel) in items {
                        li {
                            key: "{key}",
                            HotelCard { hotel }
                        }
                    }
                }
            }
        }
    }
}
