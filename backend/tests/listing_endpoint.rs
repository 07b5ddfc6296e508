//! Drives the request coordinator against the real listing route over HTTP.

use std::sync::Arc;

use backend::{api::router, catalog::HotelCatalog};
use common::{
    filter_set::{FilterField, FilterSet, PRICE_RANGE_INVERTED_MESSAGE},
    hotel::Hotel,
    listing::{FetchOutcome, HotelsFetcher, ListingState, RawResponse, RequestCoordinator, TransportError, ViewState},
    query_string::QueryString,
    url_codec,
};

struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HotelsFetcher for HttpFetcher {
    async fn fetch_hotels(&self, query: &QueryString) -> Result<RawResponse, TransportError> {
        let mut url = format!("{}/hotels", self.base_url);
        if !query.is_empty() {
            url = format!("{url}?{query}");
        }
        let response = self.client.get(url).send().await.map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

fn hotel(id: &str, rating: f64, price: f64) -> Hotel {
    Hotel {
        id: Some(id.to_string()),
        fallback_id: None,
        name: format!("Hotel {id}"),
        description: None,
        location: None,
        rating: Some(rating),
        price_per_night: price,
        photos: None,
    }
}

async fn start_server() -> String {
    let catalog = HotelCatalog::from_hotels(vec![
        hotel("a", 2.5, 60.0),
        hotel("b", 3.5, 120.0),
        hotel("c", 5.0, 300.0),
    ]);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(Arc::new(catalog))).await.unwrap();
    });
    format!("http://{addr}")
}

async fn coordinator() -> RequestCoordinator<HttpFetcher> {
    let base_url = start_server().await;
    RequestCoordinator::new(HttpFetcher { client: reqwest::Client::new(), base_url })
}

fn applied(outcome: FetchOutcome) -> ListingState {
    match outcome {
        FetchOutcome::Applied(state) => state,
        FetchOutcome::Discarded => panic!("request was discarded"),
    }
}

#[tokio::test]
async fn url_without_filters_lists_every_hotel() {
    let coordinator = coordinator().await;
    let filters = url_codec::decode(&QueryString::parse("?page=2"));
    let state = applied(coordinator.fetch(&filters).await);
    assert_eq!(state.hotels.len(), 3);
    assert!(matches!(state.view(), ViewState::Populated(_)));
}

#[tokio::test]
async fn url_filters_reach_the_server() {
    let coordinator = coordinator().await;
    let filters = url_codec::decode(&QueryString::parse("?rating=3&priceMax=200"));
    let state = applied(coordinator.fetch(&filters).await);
    let ids: Vec<_> = state.hotels.iter().filter_map(|hotel| hotel.id.clone()).collect();
    assert_eq!(ids, vec!["b".to_string()]);
}

#[tokio::test]
async fn inverted_price_range_becomes_price_max_field_error() {
    let coordinator = coordinator().await;
    let filters = url_codec::decode(&QueryString::parse("?priceMin=300&priceMax=100"));
    let state = applied(coordinator.fetch(&filters).await);
    assert!(state.hotels.is_empty());
    assert_eq!(state.operational_error(), None);
    let errors = state.field_errors().expect("field errors");
    assert_eq!(errors.get(FilterField::PriceMax), Some(PRICE_RANGE_INVERTED_MESSAGE));
    assert_eq!(state.view(), ViewState::Empty);
}

#[tokio::test]
async fn out_of_range_rating_becomes_rating_field_error() {
    let coordinator = coordinator().await;
    let filters = FilterSet { rating: Some(9.0), ..FilterSet::default() };
    let state = applied(coordinator.fetch(&filters).await);
    assert!(state.field_errors().is_some_and(|errors| errors.contains(FilterField::Rating)));
}

#[tokio::test]
async fn unreachable_server_is_an_operational_error() {
    let coordinator = RequestCoordinator::new(HttpFetcher {
        client: reqwest::Client::new(),
        base_url: "http://127.0.0.1:9".to_string(),
    });
    let state = applied(coordinator.fetch(&FilterSet::default()).await);
    assert!(state.operational_error().is_some_and(|message| message.starts_with("Network error")));
    assert!(state.hotels.is_empty());
}
