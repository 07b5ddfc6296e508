//! Maps a finished listing request onto exactly one outcome.

use crate::api_error::{ApiErrorBody, ErrorCode};
use crate::filter_set::{FieldErrors, FilterField, PRICE_RANGE_INVERTED_MESSAGE};
use crate::listing::coordinator::{RawResponse, TransportError};
use crate::listing::response::validate_hotels;
use crate::listing::view_state::CycleOutcome;

pub const STATUS_UNPROCESSABLE: u16 = 422;

pub fn reconcile(result: Result<RawResponse, TransportError>) -> CycleOutcome {
    match result {
        Ok(response) => reconcile_response(&response),
        Err(err) => CycleOutcome::Operational(err.to_string()),
    }
}

pub fn reconcile_response(response: &RawResponse) -> CycleOutcome {
    if response.is_success() {
        return match validate_hotels(&response.body) {
            Ok(hotels) => CycleOutcome::Success(hotels),
            Err(message) => CycleOutcome::Operational(message),
        };
    }

    let body = serde_json::from_str::<ApiErrorBody>(&response.body).ok();
    let Some(body) = body else {
        return CycleOutcome::Operational(generic_failure(response.status));
    };

    if response.status == STATUS_UNPROCESSABLE {
        let errors = body.known_field_errors();
        if !errors.is_empty() {
            return CycleOutcome::FieldErrors(errors);
        }
    }
    if body.code == Some(ErrorCode::PriceRangeInverted) {
        let message = body.error_message().unwrap_or(PRICE_RANGE_INVERTED_MESSAGE);
        return CycleOutcome::FieldErrors(FieldErrors::single(FilterField::PriceMax, message));
    }
    match body.error_message() {
        Some(message) => CycleOutcome::Operational(message.to_string()),
        None => CycleOutcome::Operational(generic_failure(response.status)),
    }
}

fn generic_failure(status: u16) -> String {
    format!("Request failed with status {status}")
}
