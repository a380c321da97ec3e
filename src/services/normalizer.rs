use chrono::Utc;

use crate::models::provider::ProviderRecord;
use crate::models::recommendation::{Coordinates, PlaceType, Recommendation};

pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/300x200/e2e8f0/64748b?text=Travel+Spot";

/// Tag marking a recommendation as coming from the live provider rather
/// than the fallback generator.
pub const PROVIDER_TAG: &str = "qloo";

const DEFAULT_RATING: f64 = 4.0;

/// Build a canonical `Recommendation` out of one raw provider record.
/// Every field has a deterministic default, so this never fails; records
/// the provider mangled beyond recognition are dropped earlier, at parse
/// time.
pub fn normalize_record(record: &ProviderRecord, index: usize, destination: &str) -> Recommendation {
    let name = record
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Location {}", index + 1));

    let description = record
        .prop_str(&["description"])
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("Visit {} in {}", name, destination));

    let image = record
        .prop_str(&["image", "url"])
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();

    let rating = record
        .prop_f64(&["business_rating"])
        .or_else(|| record.popularity.map(|p| (p * 5.0 * 10.0).round() / 10.0))
        .unwrap_or(DEFAULT_RATING);

    let address = record
        .prop_str(&["address"])
        .or_else(|| record.prop_str(&["geocode", "city"]))
        .unwrap_or(destination)
        .to_string();

    let coordinates = record.location.as_ref().and_then(|loc| {
        let lat = loc.lat?;
        let lng = loc.lon.or(loc.lng)?;
        Some(Coordinates { lat, lng })
    });

    // No type tokens at all: fall back to keywords in the name, so
    // "Kyoto National Museum" still lands on `museum` instead of the
    // default.
    let place_type = if record.types.is_empty() {
        PlaceType::from_provider_token(&name)
    } else {
        PlaceType::from_provider_tokens(&record.types)
    };

    let id = record
        .entity_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("qloo-{}-{}", Utc::now().timestamp_millis(), index));

    Recommendation {
        id,
        name,
        place_type,
        description,
        image,
        rating,
        address,
        tags: build_tags(destination, place_type),
        coordinates,
        qloo_score: record.popularity,
    }
}

/// Lowercase tag set: destination, mapped type, provenance marker.
/// Duplicates removed while preserving order.
fn build_tags(destination: &str, place_type: PlaceType) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in [
        destination.to_lowercase(),
        place_type.as_str().to_string(),
        PROVIDER_TAG.to_string(),
    ] {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
