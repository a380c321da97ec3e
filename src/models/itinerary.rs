use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::recommendation::{PlaceType, Recommendation, UserPreferences};

/// A saved favorite. Subset of `Recommendation` plus the time it was added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

/// An itinerary entry, grouped into a trip folder via `itinerary_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
    #[serde(rename = "itineraryId")]
    pub itinerary_id: String,
}

/// A user-defined grouping of itinerary items by destination/trip.
/// `item_count` is a derived cache, recomputed from the itinerary store
/// whenever items for this folder change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripFolder {
    pub id: String,
    pub name: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<Utc>,
    #[serde(rename = "itemCount")]
    pub item_count: usize,
}

/// A fully assembled itinerary: the preferences that produced it plus the
/// spots the user picked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: String,
    pub destination: String,
    #[serde(rename = "totalDays")]
    pub total_days: u32,
    pub preferences: UserPreferences,
    pub spots: Vec<Recommendation>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The last successful search, cached so a reload within the hour does not
/// re-query the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchState {
    pub destination: String,
    pub preferences: String,
    #[serde(rename = "selectedCategories")]
    pub selected_categories: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    /// Unix milliseconds of the search that produced this state.
    #[serde(rename = "lastSearchTime")]
    pub last_search_time: i64,
}
