//! `GET /hotels` listing endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{
    api_error::{ApiErrorBody, ErrorCode},
    filter_set::{FieldErrors, FilterField, FilterForm, PRICE_RANGE_INVERTED_MESSAGE},
    query_string::QueryString,
};
use tracing::{info, warn};

use crate::catalog::HotelCatalog;

/// Filters are parsed strictly: a value that is not a number is rejected, not ignored.
pub async fn list_hotels(State(catalog): State<Arc<HotelCatalog>>, RawQuery(raw): RawQuery) -> Response {
    let params = QueryString::parse(raw.as_deref().unwrap_or_default());
    match FilterForm::from_query(&params).parse() {
        Ok(filters) => {
            let hotels = catalog.search(&filters);
            info!("list_hotels: {} of {} hotels match {:?}", hotels.len(), catalog.len(), filters);
            Json(hotels).into_response()
        }
        Err(errors) => {
            warn!("list_hotels: rejected filters {:?}", errors);
            let body = ApiErrorBody::invalid_filters(&errors, error_code(&errors));
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
    }
}

fn error_code(errors: &FieldErrors) -> ErrorCode {
    if errors.get(FilterField::PriceMax) == Some(PRICE_RANGE_INVERTED_MESSAGE) {
        ErrorCode::PriceRangeInverted
    } else {
        ErrorCode::InvalidFilters
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use common::hotel::Hotel;

    use super::*;

    fn catalog() -> Arc<HotelCatalog> {
        let hotel = |id: &str, rating: f64, price: f64| Hotel {
            id: Some(id.to_string()),
            fallback_id: None,
            name: id.to_uppercase(),
            description: None,
            location: Some("Bergen".to_string()),
            rating: Some(rating),
            price_per_night: price,
            photos: None,
        };
        Arc::new(HotelCatalog::from_hotels(vec![hotel("a", 3.0, 90.0), hotel("b", 5.0, 210.0)]))
    }

    async fn call(query: Option<&str>) -> (StatusCode, serde_json::Value) {
        let response = list_hotels(State(catalog()), RawQuery(query.map(str::to_string))).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn without_query_lists_everything() {
        let (status, body) = call(None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filters_by_rating() {
        let (status, body) = call(Some("rating=4&utm=x")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "b");
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn inverted_range_is_unprocessable_with_code() {
        let (status, body) = call(Some("priceMin=300&priceMax=100")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "price_range_inverted");
        assert_eq!(body["details"]["fieldErrors"]["priceMax"][0], PRICE_RANGE_INVERTED_MESSAGE);
    }

    #[tokio::test]
    async fn non_numeric_values_are_rejected() {
        let (status, body) = call(Some("rating=lots")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "invalid_filters");
        assert_eq!(body["details"]["fieldErrors"]["rating"][0], "rating must be a number");
    }
}
