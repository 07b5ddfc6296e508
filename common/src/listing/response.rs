//! Payload validation for successful listing responses.

use crate::hotel::Hotel;

pub const INVALID_RESPONSE_SHAPE: &str = "Invalid response shape";

/// Accepts only a JSON array of hotel records. Anything else, including a body
/// that is not JSON at all, is rejected as a whole.
pub fn validate_hotels(body: &str) -> Result<Vec<Hotel>, String> {
    serde_json::from_str::<Vec<Hotel>>(body).map_err(|err| {
        tracing::debug!("rejecting listing payload: {err}");
        INVALID_RESPONSE_SHAPE.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hotel_array() {
        let body = r#"[
            {"id":"1","name":"Aurora","pricePerNight":150,"rating":4.5,"location":"Tromso"},
            {"_id":"x2","name":"Birch","pricePerNight":80.25,"photos":[]}
        ]"#;
        let hotels = validate_hotels(body).unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].price_per_night, 150.0);
        assert_eq!(hotels[1].fallback_id.as_deref(), Some("x2"));
    }

    #[test]
    fn accepts_empty_array() {
        assert!(validate_hotels("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_body() {
        assert_eq!(validate_hotels(r#"{"hotels":[]}"#).unwrap_err(), INVALID_RESPONSE_SHAPE);
        assert_eq!(validate_hotels("").unwrap_err(), INVALID_RESPONSE_SHAPE);
        assert_eq!(validate_hotels("<html>").unwrap_err(), INVALID_RESPONSE_SHAPE);
    }

    #[test]
    fn one_malformed_record_rejects_everything() {
        let body = r#"[{"id":"1","name":"Aurora","pricePerNight":150},{"id":"2","name":"Broken"}]"#;
        assert!(validate_hotels(body).is_err());
        let body = r#"[{"id":"1","name":"Aurora","pricePerNight":"cheap"}]"#;
        assert!(validate_hotels(body).is_err());
    }
}
