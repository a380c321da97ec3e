/// Ordered search queries for one destination, most targeted first.
///
/// Category-specific templates come before the generic fallbacks so that a
/// strategy scan hits the narrow queries while the upstream index still has
/// something precise to say, and only then widens out.
pub fn build_search_strategies(destination: &str, selected_categories: &[String]) -> Vec<String> {
    let mut queries = Vec::new();

    for category in selected_categories {
        for template in category_templates(category) {
            queries.push(template.replace("{}", destination));
        }
    }

    // Generic fallbacks, always appended last.
    queries.push(format!("attractions in {}", destination));
    queries.push(format!("places to visit {}", destination));
    queries.push(format!("tourist spots {}", destination));
    queries.push(destination.to_string());

    queries.retain(|q| !q.trim().is_empty());
    queries
}

/// Per-category query templates, `{}` standing in for the destination.
/// Unknown categories fall back to a single `"{category} {destination}"`
/// query rather than being dropped.
fn category_templates(category: &str) -> Vec<String> {
    let templates: &[&str] = match category.to_lowercase().as_str() {
        "museums" => &[
            "famous museums {}",
            "top museums {}",
            "best museums to visit {}",
            "museum attractions {}",
            "national museum {}",
        ],
        "restaurants" => &[
            "best restaurants {}",
            "famous restaurants {}",
            "top rated restaurants {}",
            "local dining {}",
        ],
        "hotels" => &[
            "best hotels {}",
            "luxury hotels {}",
            "boutique hotels {}",
            "top rated hotels {}",
        ],
        "attractions" => &[
            "top attractions {}",
            "famous landmarks {}",
            "must see attractions {}",
            "sightseeing {}",
        ],
        "parks" => &[
            "best parks {}",
            "famous gardens {}",
            "parks to visit {}",
            "nature spots {}",
        ],
        "entertainment" => &[
            "entertainment venues {}",
            "best shows {}",
            "theaters {}",
            "nightlife {}",
        ],
        "shopping" => &[
            "shopping districts {}",
            "best markets {}",
            "shopping malls {}",
            "local shops {}",
        ],
        "cafes" => &[
            "best cafes {}",
            "famous coffee shops {}",
            "cozy cafes {}",
            "specialty coffee {}",
        ],
        "food" => &[
            "street food {}",
            "food markets {}",
            "local cuisine {}",
            "famous dishes {}",
        ],
        "history" => &[
            "historical sites {}",
            "historic landmarks {}",
            "heritage sites {}",
            "monuments {}",
        ],
        "culture" => &[
            "cultural attractions {}",
            "cultural center {}",
            "traditional arts {}",
            "cultural experiences {}",
        ],
        other => {
            return vec![format!("{} {{}}", other)];
        }
    };

    templates.iter().map(|t| t.to_string()).collect()
}
