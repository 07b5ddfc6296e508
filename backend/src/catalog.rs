//! In-memory hotel catalog backing the listing endpoint.

use std::path::Path;

use anyhow::Context;
use common::{filter_set::FilterSet, hotel::Hotel};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct HotelCatalog {
    hotels: Vec<Hotel>,
}

impl HotelCatalog {
    pub fn from_hotels(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    /// Reads a JSON array of hotels.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read hotel catalog {}", path.display()))?;
        let hotels: Vec<Hotel> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse hotel catalog {}", path.display()))?;
        info!("Loaded {} hotels from {}", hotels.len(), path.display());
        Ok(Self::from_hotels(hotels))
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    /// Hotels matching already validated filters, in catalog order.
    pub fn search(&self, filters: &FilterSet) -> Vec<Hotel> {
        self.hotels.iter().filter(|hotel| matches(hotel, filters)).cloned().collect()
    }
}

fn matches(hotel: &Hotel, filters: &FilterSet) -> bool {
    if let Some(min_rating) = filters.rating {
        // unrated hotels never satisfy a rating filter
        if !hotel.rating.is_some_and(|rating| rating >= min_rating) {
            return false;
        }
    }
    if filters.price_min.is_some_and(|min| hotel.price_per_night < min) {
        return false;
    }
    if filters.price_max.is_some_and(|max| hotel.price_per_night > max) {
        return false;
    }
    true
}
