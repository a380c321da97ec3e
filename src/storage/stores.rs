use chrono::Utc;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::itinerary::{FavoriteItem, Itinerary, ItineraryItem, SearchState, TripFolder};
use crate::storage::kv::KeyValueStore;

pub const FAVORITES_KEY: &str = "travel-favorites";
pub const ITINERARY_ITEMS_KEY: &str = "travel-itinerary-items";
pub const TRIP_FOLDERS_KEY: &str = "trip-folders";
pub const SEARCH_RESULTS_KEY: &str = "searchResults";

/// Cached searches older than this are treated as absent.
pub const SEARCH_TTL_MS: i64 = 3_600_000;

const FOLDER_COLORS: &[&str] = &[
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-orange-500",
    "bg-pink-500",
    "bg-indigo-500",
];

#[derive(Debug)]
pub enum StoreError {
    DuplicateItem(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateItem(name) => {
                write!(f, "{} is already in your itinerary", name)
            }
        }
    }
}

impl Error for StoreError {}

/// All client-visible state: favorites, itinerary items, trip folders and
/// the last-search cache, persisted whole-collection-at-a-time through an
/// injected key/value store.
///
/// Every mutation re-reads the latest persisted collection before writing
/// so rapid successive calls never clobber each other, and malformed or
/// absent persisted data is treated as an empty collection rather than an
/// error.
#[derive(Clone)]
pub struct ClientState {
    store: Arc<dyn KeyValueStore>,
}

impl ClientState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.store.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                eprintln!("Discarding malformed data under '{}': {}", key, err);
                Vec::new()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        match serde_json::to_string(items) {
            Ok(json) => self.store.set(key, json),
            Err(err) => eprintln!("Failed to serialize '{}': {}", key, err),
        }
    }

    // --- Favorites -------------------------------------------------------

    pub fn favorites(&self) -> Vec<FavoriteItem> {
        self.load(FAVORITES_KEY)
    }

    /// Idempotent by id: adding an existing favorite is a no-op. Returns
    /// whether anything was actually added.
    pub fn add_favorite(&self, item: FavoriteItem) -> bool {
        let mut favorites: Vec<FavoriteItem> = self.load(FAVORITES_KEY);
        if favorites.iter().any(|f| f.id == item.id) {
            return false;
        }
        favorites.push(item);
        self.save(FAVORITES_KEY, &favorites);
        true
    }

    pub fn remove_favorite(&self, id: &str) {
        let mut favorites: Vec<FavoriteItem> = self.load(FAVORITES_KEY);
        favorites.retain(|f| f.id != id);
        self.save(FAVORITES_KEY, &favorites);
    }

    pub fn is_favorited(&self, id: &str) -> bool {
        self.favorites().iter().any(|f| f.id == id)
    }

    pub fn clear_favorites(&self) {
        self.store.remove(FAVORITES_KEY);
    }

    // --- Itinerary items -------------------------------------------------

    pub fn itinerary_items(&self) -> Vec<ItineraryItem> {
        self.load(ITINERARY_ITEMS_KEY)
    }

    pub fn itinerary_items_for_folder(&self, folder_id: &str) -> Vec<ItineraryItem> {
        self.itinerary_items()
            .into_iter()
            .filter(|item| item.itinerary_id == folder_id)
            .collect()
    }

    /// Unlike favorites, a duplicate add is rejected loudly so the caller
    /// can tell the user.
    pub fn add_itinerary_item(&self, item: ItineraryItem) -> Result<(), StoreError> {
        let mut items: Vec<ItineraryItem> = self.load(ITINERARY_ITEMS_KEY);
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::DuplicateItem(item.name));
        }
        let folder_id = item.itinerary_id.clone();
        items.push(item);
        self.save(ITINERARY_ITEMS_KEY, &items);
        self.refresh_folder_count(&folder_id);
        Ok(())
    }

    pub fn remove_itinerary_item(&self, id: &str) {
        let mut items: Vec<ItineraryItem> = self.load(ITINERARY_ITEMS_KEY);
        let folder_id = items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.itinerary_id.clone());
        items.retain(|item| item.id != id);
        self.save(ITINERARY_ITEMS_KEY, &items);
        if let Some(folder_id) = folder_id {
            self.refresh_folder_count(&folder_id);
        }
    }

    pub fn clear_itinerary(&self) {
        self.store.remove(ITINERARY_ITEMS_KEY);
    }

    // --- Trip folders ----------------------------------------------------

    pub fn folders(&self) -> Vec<TripFolder> {
        self.load(TRIP_FOLDERS_KEY)
    }

    pub fn folder(&self, id: &str) -> Option<TripFolder> {
        self.folders().into_iter().find(|f| f.id == id)
    }

    pub fn create_folder(
        &self,
        name: &str,
        destination: &str,
        description: Option<String>,
    ) -> TripFolder {
        let now = Utc::now();
        let color = FOLDER_COLORS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&FOLDER_COLORS[0]);

        let folder = TripFolder {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            destination: destination.to_string(),
            description,
            color: color.to_string(),
            created_at: now,
            last_modified: now,
            item_count: 0,
        };

        let mut folders: Vec<TripFolder> = self.load(TRIP_FOLDERS_KEY);
        folders.push(folder.clone());
        self.save(TRIP_FOLDERS_KEY, &folders);
        folder
    }

    /// Deleting a folder also drops the itinerary items filed under it.
    pub fn delete_folder(&self, id: &str) {
        let mut folders: Vec<TripFolder> = self.load(TRIP_FOLDERS_KEY);
        folders.retain(|f| f.id != id);
        self.save(TRIP_FOLDERS_KEY, &folders);

        let mut items: Vec<ItineraryItem> = self.load(ITINERARY_ITEMS_KEY);
        items.retain(|item| item.itinerary_id != id);
        self.save(ITINERARY_ITEMS_KEY, &items);
    }

    pub fn clear_folders(&self) {
        self.store.remove(TRIP_FOLDERS_KEY);
    }

    /// Recompute a folder's derived item count from the itinerary store.
    /// The count is never trusted incrementally.
    fn refresh_folder_count(&self, folder_id: &str) {
        let count = self.itinerary_items_for_folder(folder_id).len();
        let mut folders: Vec<TripFolder> = self.load(TRIP_FOLDERS_KEY);
        let mut changed = false;
        for folder in folders.iter_mut() {
            if folder.id == folder_id {
                folder.item_count = count;
                folder.last_modified = Utc::now();
                changed = true;
            }
        }
        if changed {
            self.save(TRIP_FOLDERS_KEY, &folders);
        }
    }

    // --- Saved itineraries -----------------------------------------------

    pub fn save_itinerary(&self, itinerary: &Itinerary) {
        match serde_json::to_string(itinerary) {
            Ok(json) => self.store.set(&format!("itinerary-{}", itinerary.id), json),
            Err(err) => eprintln!("Failed to serialize itinerary: {}", err),
        }
    }

    pub fn saved_itinerary(&self, id: &str) -> Option<Itinerary> {
        let raw = self.store.get(&format!("itinerary-{}", id))?;
        serde_json::from_str(&raw).ok()
    }

    // --- Last-search cache -----------------------------------------------

    pub fn save_search(&self, state: &SearchState) {
        match serde_json::to_string(state) {
            Ok(json) => self.store.set(SEARCH_RESULTS_KEY, json),
            Err(err) => eprintln!("Failed to serialize search state: {}", err),
        }
    }

    /// The cached search, if it is fresh. Stale or malformed entries read
    /// back as `None`.
    pub fn last_search(&self) -> Option<SearchState> {
        let raw = self.store.get(SEARCH_RESULTS_KEY)?;
        let state: SearchState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                eprintln!("Discarding malformed search cache: {}", err);
                return None;
            }
        };

        let age = Utc::now().timestamp_millis() - state.last_search_time;
        if age > SEARCH_TTL_MS {
            return None;
        }
        Some(state)
    }

    pub fn clear_search(&self) {
        self.store.remove(SEARCH_RESULTS_KEY);
    }
}
