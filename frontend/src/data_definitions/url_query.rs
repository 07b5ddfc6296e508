//! Query string carried by listing routes.

use std::fmt::Display;

use common::query_string::QueryString;

// Router query segments need `From<&str>` to parse and `Display` to write back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UrlQuery(pub QueryString);

impl From<QueryString> for UrlQuery {
    fn from(value: QueryString) -> Self {
        UrlQuery(value)
    }
}

impl From<&str> for UrlQuery {
    fn from(value: &str) -> Self {
        UrlQuery(QueryString::parse(value))
    }
}

impl Display for UrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
