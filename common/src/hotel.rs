//! Hotel listing records shared between frontend and backend.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub fallback_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub price_per_night: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

/// Key used to tell rendered hotels apart.
///
/// `Local` is derived from the position in the current result list. It only
/// exists for rendering and is never a business identity, see [`Hotel::business_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelKey<'a> {
    Id(&'a str),
    FallbackId(&'a str),
    Local(usize),
}

impl Display for HotelKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelKey::Id(id) => write!(f, "id-{id}"),
            HotelKey::FallbackId(id) => write!(f, "fallback-{id}"),
            HotelKey::Local(position) => write!(f, "local-{position}"),
        }
    }
}

impl Hotel {
    pub fn key(&self, position: usize) -> HotelKey<'_> {
        if let Some(id) = self.id.as_deref().filter(|id| !id.is_empty()) {
            return HotelKey::Id(id);
        }
        if let Some(id) = self.fallback_id.as_deref().filter(|id| !id.is_empty()) {
            return HotelKey::FallbackId(id);
        }
        HotelKey::Local(position)
    }

    pub fn business_id(&self) -> Option<&str> {
        match self.key(0) {
            HotelKey::Id(id) | HotelKey::FallbackId(id) => Some(id),
            HotelKey::Local(_) => None,
        }
    }

    pub fn first_photo(&self) -> Option<&str> {
        self.photos.as_ref().and_then(|photos| photos.first()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: Option<&str>, fallback_id: Option<&str>) -> Hotel {
        Hotel {
            id: id.map(str::to_string),
            fallback_id: fallback_id.map(str::to_string),
            name: "Harbour Inn".to_string(),
            description: None,
            location: None,
            rating: None,
            price_per_night: 80.0,
            photos: None,
        }
    }

    #[test]
    fn key_prefers_primary_then_fallback_then_position() {
        assert_eq!(hotel(Some("h1"), Some("m1")).key(4), HotelKey::Id("h1"));
        assert_eq!(hotel(None, Some("m1")).key(4), HotelKey::FallbackId("m1"));
        assert_eq!(hotel(Some(""), None).key(4), HotelKey::Local(4));
    }

    #[test]
    fn local_key_is_not_a_business_id() {
        assert_eq!(hotel(None, None).business_id(), None);
        assert_eq!(hotel(None, Some("m1")).business_id(), Some("m1"));
    }

    #[test]
    fn deserializes_wire_names() {
        let json = r#"{"_id":"abc","name":"Fjord View","pricePerNight":120.5,"photos":["a.jpg"]}"#;
        let parsed: Hotel = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.fallback_id.as_deref(), Some("abc"));
        assert_eq!(parsed.price_per_night, 120.5);
        assert_eq!(parsed.first_photo(), Some("a.jpg"));
        assert_eq!(parsed.rating, None);
    }
}
