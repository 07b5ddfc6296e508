//! Error body returned by the hotel listing endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_set::{FieldErrors, FilterField};

/// Machine-readable failure kind. Unknown codes from newer servers map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidFilters,
    PriceRangeInverted,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetails {
    #[serde(default)]
    pub field_errors: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ApiErrorDetails>,
}

impl ApiErrorBody {
    pub fn message(error: impl Into<String>) -> Self {
        Self { error: Some(error.into()), ..Self::default() }
    }

    /// 422 body for a failed filter validation.
    pub fn invalid_filters(errors: &FieldErrors, code: ErrorCode) -> Self {
        let field_errors = errors
            .iter()
            .map(|(field, message)| (field.as_str().to_string(), vec![message.to_string()]))
            .collect();
        Self {
            error: Some("Invalid filters".to_string()),
            code: Some(code),
            details: Some(ApiErrorDetails { field_errors }),
        }
    }

    /// First message of every known filter field. Unknown fields and empty lists are skipped.
    pub fn known_field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let Some(details) = &self.details else {
            return errors;
        };
        for (name, messages) in &details.field_errors {
            if let (Some(field), Some(message)) = (FilterField::from_name(name), messages.first()) {
                errors.insert(field, message.clone());
            }
        }
        errors
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().map(str::trim).filter(|error| !error.is_empty())
    }
}
