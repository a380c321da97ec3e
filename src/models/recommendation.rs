use serde::{Deserialize, Serialize};

/// Closed vocabulary for place types. Provider type tokens are mapped into
/// this set; anything unrecognized becomes `Attraction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Restaurant,
    Hotel,
    Attraction,
    Museum,
    Park,
    Entertainment,
    Shopping,
    Cafe,
}

impl PlaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Restaurant => "restaurant",
            PlaceType::Hotel => "hotel",
            PlaceType::Attraction => "attraction",
            PlaceType::Museum => "museum",
            PlaceType::Park => "park",
            PlaceType::Entertainment => "entertainment",
            PlaceType::Shopping => "shopping",
            PlaceType::Cafe => "cafe",
        }
    }

    /// Map a raw provider type token into the closed vocabulary by keyword
    /// substring match.
    pub fn from_provider_token(token: &str) -> Self {
        let token = token.to_lowercase();

        if token.contains("museum") || token.contains("gallery") || token.contains("exhibition") {
            PlaceType::Museum
        } else if token.contains("restaurant")
            || token.contains("dining")
            || token.contains("food")
        {
            PlaceType::Restaurant
        } else if token.contains("cafe") || token.contains("coffee") {
            PlaceType::Cafe
        } else if token.contains("hotel")
            || token.contains("lodging")
            || token.contains("resort")
            || token.contains("accommodation")
        {
            PlaceType::Hotel
        } else if token.contains("park") || token.contains("garden") || token.contains("nature") {
            PlaceType::Park
        } else if token.contains("shop") || token.contains("market") || token.contains("retail") {
            PlaceType::Shopping
        } else if token.contains("entertainment")
            || token.contains("theater")
            || token.contains("theatre")
            || token.contains("nightlife")
            || token.contains("venue")
        {
            PlaceType::Entertainment
        } else {
            PlaceType::Attraction
        }
    }

    /// First token that maps to something other than the default, else the
    /// default.
    pub fn from_provider_tokens(tokens: &[String]) -> Self {
        tokens
            .iter()
            .map(|t| Self::from_provider_token(t))
            .find(|t| *t != PlaceType::Attraction)
            .unwrap_or(PlaceType::Attraction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A normalized point of interest, the only shape the rest of the system
/// (and the UI) ever sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub address: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "qlooScore", skip_serializing_if = "Option::is_none")]
    pub qloo_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    #[default]
    Solo,
    Couple,
    Family,
    Group,
}

fn default_number_of_days() -> u32 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub destination: String,
    #[serde(default)]
    pub preferences: String,
    #[serde(default, rename = "selectedCategories")]
    pub selected_categories: Vec<String>,
    #[serde(default = "default_number_of_days", rename = "numberOfDays")]
    pub number_of_days: u32,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default, rename = "travelStyle")]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(
        default,
        rename = "departureDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub departure_date: Option<String>,
}

impl UserPreferences {
    pub fn for_destination(destination: &str) -> Self {
        Self {
            destination: destination.to_string(),
            preferences: String::new(),
            selected_categories: Vec::new(),
            number_of_days: default_number_of_days(),
            budget: Budget::default(),
            travel_style: TravelStyle::default(),
            interests: Vec::new(),
            departure_date: None,
        }
    }
}
