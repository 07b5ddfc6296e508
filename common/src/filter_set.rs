//! Typed hotel listing filters: raw form input, parsing and validation.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::query_string::QueryString;

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

/// Message attached to `priceMax` when the price range is inverted.
pub const PRICE_RANGE_INVERTED_MESSAGE: &str = "priceMin cannot be greater than priceMax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Rating,
    PriceMin,
    PriceMax,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Rating, FilterField::PriceMin, FilterField::PriceMax];

    /// Name used in query strings and in server error details.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Rating => "rating",
            FilterField::PriceMin => "priceMin",
            FilterField::PriceMax => "priceMax",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message per field. The first message recorded for a field wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors(BTreeMap<FilterField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: FilterField, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: FilterField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FilterField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validated filters. `None` means unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    pub rating: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterSet {
    pub fn get(&self, field: FilterField) -> Option<f64> {
        match field {
            FilterField::Rating => self.rating,
            FilterField::PriceMin => self.price_min,
            FilterField::PriceMax => self.price_max,
        }
    }

    pub fn set(&mut self, field: FilterField, value: Option<f64>) {
        match field {
            FilterField::Rating => self.rating = value,
            FilterField::PriceMin => self.price_min = value,
            FilterField::PriceMax => self.price_max = value,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Range and cross-field checks. Never panics, reports every failing field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_ranges(self, &mut errors);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn check_ranges(filters: &FilterSet, errors: &mut FieldErrors) {
    if let Some(rating) = filters.rating {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            errors.insert(FilterField::Rating, format!("rating must be between {RATING_MIN} and {RATING_MAX}"));
        }
    }
    for field in [FilterField::PriceMin, FilterField::PriceMax] {
        if let Some(price) = filters.get(field) {
            if price < 0.0 {
                errors.insert(field, format!("{field} must be 0 or greater"));
            }
        }
    }
    if let (Some(min), Some(max)) = (filters.price_min, filters.price_max) {
        if min > max {
            errors.insert(FilterField::PriceMax, PRICE_RANGE_INVERTED_MESSAGE);
        }
    }
}

/// Raw, string-typed form input as the user typed it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterForm {
    pub rating: String,
    pub price_min: String,
    pub price_max: String,
}

impl FilterForm {
    pub fn from_filters(filters: &FilterSet) -> Self {
        let show = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        Self {
            rating: show(filters.rating),
            price_min: show(filters.price_min),
            price_max: show(filters.price_max),
        }
    }

    /// Takes the first value of each filter key verbatim, without coercion.
    pub fn from_query(params: &QueryString) -> Self {
        let raw = |field: FilterField| params.get(field.as_str()).unwrap_or_default().to_string();
        Self {
            rating: raw(FilterField::Rating),
            price_min: raw(FilterField::PriceMin),
            price_max: raw(FilterField::PriceMax),
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Rating => &self.rating,
            FilterField::PriceMin => &self.price_min,
            FilterField::PriceMax => &self.price_max,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Rating => &mut self.rating,
            FilterField::PriceMin => &mut self.price_min,
            FilterField::PriceMax => &mut self.price_max,
        }
    }

    /// Coerces every field, then validates the typed result.
    pub fn parse(&self) -> Result<FilterSet, FieldErrors> {
        let mut filters = FilterSet::default();
        let mut errors = FieldErrors::new();
        for field in FilterField::ALL {
            match coerce(self.get(field)) {
                Ok(value) => filters.set(field, value),
                Err(()) => errors.insert(field, format!("{field} must be a number")),
            }
        }
        check_ranges(&filters, &mut errors);
        if errors.is_empty() { Ok(filters) } else { Err(errors) }
    }
}

/// Empty input is absent, anything else must be a finite number.
fn coerce(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(()),
    }
}
