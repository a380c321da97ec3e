use chrono::Utc;
use rand::Rng;

use crate::models::recommendation::{PlaceType, Recommendation, UserPreferences};
use crate::services::normalizer::PLACEHOLDER_IMAGE;

/// Tag marking a recommendation as synthetically generated.
pub const FALLBACK_TAG: &str = "discover";

const MAX_FALLBACK_RESULTS: usize = 8;

struct FallbackTemplate {
    name: &'static str,
    place_type: PlaceType,
    description: &'static str,
    category: &'static str,
}

/// Destination-templated placeholders covering the default category
/// spread. `{}` stands in for the destination.
const FALLBACK_TEMPLATES: &[FallbackTemplate] = &[
    FallbackTemplate {
        name: "Traditional {} Restaurant",
        place_type: PlaceType::Restaurant,
        description: "Authentic local cuisine and specialties",
        category: "restaurants",
    },
    FallbackTemplate {
        name: "{} Historic Center",
        place_type: PlaceType::Attraction,
        description: "Historic city center with landmarks",
        category: "attractions",
    },
    FallbackTemplate {
        name: "{} National Museum",
        place_type: PlaceType::Museum,
        description: "National history and culture museum",
        category: "museums",
    },
    FallbackTemplate {
        name: "{} Heritage Park",
        place_type: PlaceType::Park,
        description: "Historic park with cultural significance",
        category: "parks",
    },
    FallbackTemplate {
        name: "Heritage Hotel {}",
        place_type: PlaceType::Hotel,
        description: "Historic luxury accommodation",
        category: "hotels",
    },
    FallbackTemplate {
        name: "{} Cultural Center",
        place_type: PlaceType::Museum,
        description: "Traditional arts and cultural exhibitions",
        category: "culture",
    },
    FallbackTemplate {
        name: "Historic Quarter of {}",
        place_type: PlaceType::Attraction,
        description: "Well-preserved historical district",
        category: "history",
    },
    FallbackTemplate {
        name: "{} Artisan Market",
        place_type: PlaceType::Shopping,
        description: "Local crafts and artisan products",
        category: "shopping",
    },
    FallbackTemplate {
        name: "{} Food Market",
        place_type: PlaceType::Restaurant,
        description: "Traditional food market with local vendors",
        category: "food",
    },
    FallbackTemplate {
        name: "Traditional {} Cafe",
        place_type: PlaceType::Cafe,
        description: "Historic coffee house with local atmosphere",
        category: "cafes",
    },
    FallbackTemplate {
        name: "{} Cultural Theater",
        place_type: PlaceType::Entertainment,
        description: "Traditional performances and shows",
        category: "entertainment",
    },
];

/// Deterministic placeholder recommendations for when every live strategy
/// came up empty (or the destination was unusable). Never returns an empty
/// list.
pub fn generate_fallback_recommendations(preferences: &UserPreferences) -> Vec<Recommendation> {
    let destination = preferences.destination.trim();
    println!("Generating fallback recommendations for '{}'", destination);

    let selected: Vec<String> = preferences
        .selected_categories
        .iter()
        .map(|c| c.to_lowercase())
        .collect();

    let mut templates: Vec<&FallbackTemplate> = FALLBACK_TEMPLATES
        .iter()
        .filter(|t| selected.is_empty() || selected.contains(&t.category.to_string()))
        .collect();

    // Unrecognized categories would otherwise empty the list; fall back to
    // the full default spread instead.
    if templates.is_empty() {
        templates = FALLBACK_TEMPLATES.iter().collect();
    }

    let mut rng = rand::thread_rng();
    let stamp = Utc::now().timestamp_millis();

    templates
        .into_iter()
        .take(MAX_FALLBACK_RESULTS)
        .enumerate()
        .map(|(index, template)| Recommendation {
            id: format!("fallback-{}-{}", stamp, index),
            name: template.name.replace("{}", destination),
            place_type: template.place_type,
            description: template.description.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            rating: rng.gen_range(4.2..4.8),
            address: destination.to_string(),
            tags: vec![
                destination.to_lowercase(),
                template.category.to_string(),
                FALLBACK_TAG.to_string(),
            ],
            coordinates: None,
            qloo_score: None,
        })
        .collect()
}
