use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::models::provider::{ProviderRecord, SearchResponse};
use crate::models::recommendation::{Recommendation, UserPreferences};
use crate::services::fallback::generate_fallback_recommendations;
use crate::services::filters::{is_generic_record, matches_categories};
use crate::services::normalizer::normalize_record;
use crate::services::qloo_client::{QlooClient, QlooError};
use crate::services::query_strategy::build_search_strategies;

/// Upper bound on a successful (non-fallback) result set.
pub const MAX_RESULTS: usize = 12;

const SEARCH_LIMIT: u32 = 20;

/// Seam between the orchestrator and the outside world. The live
/// implementation is `QlooClient`; tests script their own.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, limit: u32) -> Result<SearchResponse, QlooError>;
}

#[async_trait]
impl SearchProvider for QlooClient {
    async fn search(&self, query: &str, limit: u32) -> Result<SearchResponse, QlooError> {
        QlooClient::search(self, query, limit).await
    }
}

/// Drives the whole retrieval pipeline: strategy generation, fetch,
/// generic-result rejection, normalization, category filtering, and the
/// fallback. Stateless per call; holds only its injected provider.
pub struct RecommendationService {
    provider: Arc<dyn SearchProvider>,
}

impl RecommendationService {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// One fetch attempt. Never fails: upstream errors, non-2xx responses
    /// and unparseable payloads all come back as an empty batch, and the
    /// caller moves on to the next strategy.
    async fn fetch_raw(&self, query: &str) -> Vec<Value> {
        match self.provider.search(query, SEARCH_LIMIT).await {
            Ok(response) => response.results,
            Err(err) => {
                eprintln!("Search for \"{}\" failed: {}", query, err);
                Vec::new()
            }
        }
    }

    /// First-success-wins scan over the search strategies. The first
    /// strategy whose fetched, de-genericized, category-filtered output is
    /// non-empty supplies the result, capped at `MAX_RESULTS`. Strategy
    /// order is the tie-break; there is no cross-strategy merging or
    /// re-ranking. Exhaustion (or an unusable destination) resolves to the
    /// fallback generator, never to an error.
    pub async fn get_enhanced_recommendations(
        &self,
        preferences: &UserPreferences,
    ) -> Vec<Recommendation> {
        let destination = preferences.destination.trim();
        if destination.is_empty() {
            eprintln!("Empty destination, skipping search");
            return generate_fallback_recommendations(preferences);
        }

        let strategies = build_search_strategies(destination, &preferences.selected_categories);
        println!(
            "Trying {} search strategies for '{}'",
            strategies.len(),
            destination
        );

        for (index, query) in strategies.iter().enumerate() {
            let raw = self.fetch_raw(query).await;
            if raw.is_empty() {
                continue;
            }

            let records = ProviderRecord::parse_batch(&raw);
            let concrete: Vec<&ProviderRecord> =
                records.iter().filter(|r| !is_generic_record(r)).collect();
            if concrete.is_empty() {
                continue;
            }

            let mut filtered: Vec<Recommendation> = concrete
                .iter()
                .enumerate()
                .map(|(i, record)| normalize_record(record, i, destination))
                .filter(|rec| matches_categories(rec, &preferences.selected_categories))
                .collect();

            if !filtered.is_empty() {
                filtered.truncate(MAX_RESULTS);
                println!(
                    "Strategy {} (\"{}\") produced {} recommendations",
                    index + 1,
                    query,
                    filtered.len()
                );
                return filtered;
            }
        }

        println!("All search strategies exhausted, using fallback");
        generate_fallback_recommendations(preferences)
    }
}
