//! Mapping between [`FilterSet`] and the listing page query string.
//!
//! The query string is the source of truth for the current filters. Decoding is
//! permissive (unparseable values are absent), encoding only touches the three
//! filter keys and leaves every other parameter where it was.

use crate::filter_set::{FilterField, FilterSet};
use crate::query_string::QueryString;

pub fn decode(params: &QueryString) -> FilterSet {
    let mut filters = FilterSet::default();
    for field in FilterField::ALL {
        filters.set(field, params.get(field.as_str()).and_then(parse_number));
    }
    filters
}

pub fn encode(current: &QueryString, filters: &FilterSet) -> QueryString {
    let mut params = current.clone();
    for field in FilterField::ALL {
        match filters.get(field).filter(|value| value.is_finite()) {
            Some(value) => params.set(field.as_str(), value.to_string()),
            None => params.remove(field.as_str()),
        }
    }
    params
}

/// Outbound request parameters: only the defined, finite filters.
pub fn request_query(filters: &FilterSet) -> QueryString {
    encode(&QueryString::new(), filters)
}

fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_only_filter_keys() {
        let params = QueryString::parse("rating=4&priceMin=50.5&priceMax=200&city=Oslo");
        let filters = decode(&params);
        assert_eq!(filters, FilterSet { rating: Some(4.0), price_min: Some(50.5), price_max: Some(200.0) });
    }

    #[test]
    fn decode_treats_garbage_as_absent() {
        let params = QueryString::parse("rating=abc&priceMin=&priceMax=NaN");
        assert!(decode(&params).is_unconstrained());
        let params = QueryString::parse("rating=inf");
        assert_eq!(decode(&params).rating, None);
    }

    #[test]
    fn decode_does_not_range_check() {
        let params = QueryString::parse("priceMin=300&priceMax=100");
        let filters = decode(&params);
        assert_eq!(filters.price_min, Some(300.0));
        assert_eq!(filters.price_max, Some(100.0));
    }

    #[test]
    fn no_filter_keys_decode_to_unconstrained() {
        let params = QueryString::parse("page=2&sort=name");
        let filters = decode(&params);
        assert!(filters.is_unconstrained());
        assert!(request_query(&filters).is_empty());
    }

    #[test]
    fn round_trip_from_empty_params() {
        let cases = [
            FilterSet::default(),
            FilterSet { rating: Some(0.0), price_min: None, price_max: None },
            FilterSet { rating: Some(3.7), price_min: Some(0.1), price_max: Some(0.30000000000000004) },
            FilterSet { rating: None, price_min: Some(120.0), price_max: Some(1e12) },
        ];
        for filters in cases {
            assert_eq!(decode(&encode(&QueryString::new(), &filters)), filters);
        }
    }

    #[test]
    fn encode_preserves_unrelated_keys_in_order() {
        let current = QueryString::parse("page=3&rating=1&utm=mail&tag=a&tag=b");
        let filters = FilterSet { rating: None, price_min: Some(10.0), price_max: None };
        let encoded = encode(&current, &filters);
        assert_eq!(encoded.to_string(), "page=3&utm=mail&tag=a&tag=b&priceMin=10");
        for key in current.keys().filter(|key| FilterField::from_name(key).is_none()) {
            assert!(encoded.contains_key(key));
        }
    }

    #[test]
    fn encode_replaces_existing_value_in_place() {
        let current = QueryString::parse("rating=3&page=1");
        let filters = FilterSet { rating: Some(5.0), ..FilterSet::default() };
        assert_eq!(encode(&current, &filters).to_string(), "rating=5&page=1");
    }

    #[test]
    fn encode_skips_non_finite_values() {
        let filters = FilterSet { rating: Some(f64::NAN), price_min: Some(f64::INFINITY), price_max: Some(9.0) };
        assert_eq!(request_query(&filters).to_string(), "priceMax=9");
    }
}
