//! Hotel listing page.

use dioxus::{logger::tracing, prelude::*};

use common::{
    listing::{FetchOutcome, ListingState, RequestCoordinator},
    query_string::QueryString,
    url_codec,
};
use crate::{
    api::hotels_api::HttpHotelsFetcher,
    components::{
        error_boundary::ComponentErrorBoundary,
        hotel_components::{hotel_filter_form::HotelFilterForm, hotel_result_list::HotelResultList},
    },
    data_definitions::url_query::UrlQuery,
};

#[component]
pub fn HotelsPage(query: UrlQuery) -> Element {
    rsx! {
        Title { "Hotels" }
        HotelsPageRootComponent { query: query.0.clone() }
    }
}

#[component]
fn HotelsPageRootComponent(query: ReadSignal<QueryString>) -> Element {
    // one coordinator per mounted page, so two pages never share a live request
    let coordinator = use_hook(|| RequestCoordinator::new(HttpHotelsFetcher::from_environment()));
    let mut listing = use_signal(ListingState::default);

    use_drop({
        let coordinator = coordinator.clone();
        move || coordinator.teardown()
    });

    // the url is the only trigger for a fetch cycle
    use_effect({
        let coordinator = coordinator.clone();
        move || {
            let filters = url_codec::decode(&query.read());
            let pending = coordinator.issue(&filters);
            listing.set(coordinator.state());

            let coordinator = coordinator.clone();
            spawn(async move {
                match coordinator.run(pending).await {
                    FetchOutcome::Applied(state) => listing.set(state),
                    FetchOutcome::Discarded => tracing::trace!("hotel listing response discarded"),
                }
            });
        }
    });

    let server_errors = use_memo(move || listing.read().field_errors().cloned());

    rsx! {
        div {
            id: "x-hotels-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            HotelFilterForm { query, server_errors }
            div {
                id: "x-hotel-results",
                style: "
                    flex-grow: 1;
                    min-height: 0;
                    background-color: #ECEEF2;
                    padding: 7px;
                ",
                ComponentErrorBoundary {
                    HotelResultList { listing }
                }
            }
        }
    }
}
