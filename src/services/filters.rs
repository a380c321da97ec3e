use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::provider::ProviderRecord;
use crate::models::recommendation::{PlaceType, Recommendation};

/// Names like "Museums in Paris" or "Hotels of Rome" describe a category,
/// not a venue.
static GENERIC_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(museums?|restaurants?|hotels?|attractions?|galleries?) (in|of) ")
        .expect("generic name pattern is valid")
});

/// Pre-normalization filter: true when a raw record describes a category or
/// taxonomy tag rather than a concrete point of interest. Runs before
/// normalization so the defaults never dress up a semantically empty record
/// as a real place.
pub fn is_generic_record(record: &ProviderRecord) -> bool {
    if record.has_empty_properties() {
        return true;
    }

    if let Some(name) = &record.name {
        if GENERIC_NAME_PATTERN.is_match(name) {
            return true;
        }
    }

    if record.types.iter().any(|t| is_taxonomy_marker(t)) {
        return true;
    }

    // A bare tag with no address or geocode is a label, not a place.
    if !record.has_location_info() && record.types.iter().any(|t| is_bare_tag(t)) {
        return true;
    }

    false
}

fn is_taxonomy_marker(token: &str) -> bool {
    let token = token.to_lowercase();
    token.contains("urn:tag") || token.contains("wikipedia") || token.contains("category")
}

fn is_bare_tag(token: &str) -> bool {
    let token = token.to_lowercase();
    token == "tag" || token.ends_with(":tag")
}

/// Category relevance: keep a recommendation iff it plausibly matches at
/// least one selected category. An empty selection passes everything.
pub fn matches_categories(recommendation: &Recommendation, selected_categories: &[String]) -> bool {
    if selected_categories.is_empty() {
        return true;
    }

    selected_categories
        .iter()
        .any(|category| matches_category(recommendation, category))
}

fn matches_category(recommendation: &Recommendation, category: &str) -> bool {
    let category = category.to_lowercase();

    if category_types(&category).contains(&recommendation.place_type) {
        return true;
    }

    let haystack = format!(
        "{} {} {} {}",
        recommendation.name,
        recommendation.description,
        recommendation.tags.join(" "),
        recommendation.place_type.as_str()
    )
    .to_lowercase();

    if haystack.contains(&category) {
        return true;
    }

    category_keywords(&category)
        .iter()
        .any(|keyword| haystack.contains(keyword))
}

/// Which closed types count as a direct hit for a category.
fn category_types(category: &str) -> &'static [PlaceType] {
    match category {
        "museums" => &[PlaceType::Museum],
        "restaurants" => &[PlaceType::Restaurant],
        "food" => &[PlaceType::Restaurant, PlaceType::Cafe],
        "hotels" => &[PlaceType::Hotel],
        "attractions" => &[PlaceType::Attraction],
        "parks" => &[PlaceType::Park],
        "entertainment" | "nightlife" => &[PlaceType::Entertainment],
        "shopping" => &[PlaceType::Shopping],
        "cafes" => &[PlaceType::Cafe],
        "history" | "culture" => &[PlaceType::Museum],
        _ => &[],
    }
}

/// Broader synonym table per category, matched as case-insensitive
/// substrings over name/description/tags/type. Unknown categories rely on
/// the literal keyword check in `matches_category`.
fn category_keywords(category: &str) -> Vec<&'static str> {
    match category {
        "museums" => vec![
            "museum",
            "gallery",
            "exhibition",
            "collection",
            "cultural center",
        ],
        "restaurants" => vec!["restaurant", "dining", "cuisine", "culinary", "eatery"],
        "food" => vec!["food", "restaurant", "dining", "cuisine", "market", "culinary"],
        "hotels" => vec!["hotel", "accommodation", "lodging", "resort", "hostel"],
        "attractions" => vec!["attraction", "landmark", "sightseeing", "monument"],
        "parks" => vec!["park", "garden", "nature", "outdoor"],
        "entertainment" => vec!["entertainment", "show", "theater", "theatre", "venue"],
        "shopping" => vec!["shopping", "market", "mall", "retail", "bazaar"],
        "cafes" => vec!["cafe", "coffee"],
        "history" => vec![
            "history",
            "historic",
            "historical",
            "heritage",
            "monument",
            "museum",
        ],
        "culture" => vec![
            "culture",
            "cultural",
            "museum",
            "art",
            "heritage",
            "gallery",
            "traditional",
        ],
        "nightlife" => vec!["nightlife", "bar", "nightclub", "club"],
        _ => vec![],
    }
}
