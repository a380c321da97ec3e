use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::env;

use crate::models::recommendation::{PlaceType, Recommendation, UserPreferences};
use crate::services::normalizer::PLACEHOLDER_IMAGE;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-4o-mini";

/// Optional text-generation collaborator. Built without a key it simply
/// produces empty results; nothing downstream treats that as an error.
#[derive(Clone)]
pub struct LlmService {
    client: Client,
    api_key: Option<String>,
}

impl LlmService {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").ok();
        if api_key.is_none() {
            println!("OPENAI_API_KEY not set, LLM recommendations disabled");
        }
        Self::new(api_key)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the LLM for recommendations matching the preferences. Every
    /// failure mode (missing key, network, non-2xx, no JSON array in the
    /// completion) degrades to an empty list.
    pub async fn generate_recommendations(
        &self,
        preferences: &UserPreferences,
    ) -> Vec<Recommendation> {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => return Vec::new(),
        };

        let body = json!({
            "model": OPENAI_MODEL,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a travel expert. Respond with a valid JSON array only, no extra text."
                },
                {
                    "role": "user",
                    "content": build_prompt(preferences)
                }
            ],
            "temperature": 0.7
        });

        let response = match self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                eprintln!("LLM request failed: {}", err);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            eprintln!("LLM request returned status {}", response.status());
            return Vec::new();
        }

        let payload: Value = match response.json().await {
            Ok(value) => value,
            Err(err) => {
                eprintln!("Failed to parse LLM response: {}", err);
                return Vec::new();
            }
        };

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("");

        parse_llm_recommendations(content, &preferences.destination)
    }
}

fn build_prompt(preferences: &UserPreferences) -> String {
    format!(
        "Generate personalized travel recommendations for:\n\
         Destination: {}\n\
         Duration: {} days\n\
         Budget: {:?}\n\
         Travel Style: {:?}\n\
         Interests: {}\n\
         Departure Date: {}\n\n\
         Provide {} specific recommendations as a JSON array of objects with \
         fields: name, type, description, address, tags, estimatedRating.",
        preferences.destination,
        preferences.number_of_days,
        preferences.budget,
        preferences.travel_style,
        preferences.interests.join(", "),
        preferences
            .departure_date
            .as_deref()
            .unwrap_or("Not specified"),
        preferences.number_of_days * 2,
    )
}

/// Extract the first top-level JSON array substring from free-form text.
/// Bracket depth is tracked outside string literals so brackets inside
/// values do not confuse the scan.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'[' if !in_string => depth += 1,
            b']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Map the model's loose JSON into canonical recommendations. Entries with
/// no name are dropped; everything else gets the usual defaults.
fn parse_llm_recommendations(content: &str, destination: &str) -> Vec<Recommendation> {
    let array_text = match extract_json_array(content) {
        Some(text) => text,
        None => {
            eprintln!("No JSON array found in LLM response");
            return Vec::new();
        }
    };

    let entries: Vec<Value> = match serde_json::from_str(array_text) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Failed to parse LLM JSON array: {}", err);
            return Vec::new();
        }
    };

    let stamp = Utc::now().timestamp_millis();

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let name = entry["name"].as_str()?.trim();
            if name.is_empty() {
                return None;
            }

            let place_type =
                PlaceType::from_provider_token(entry["type"].as_str().unwrap_or("attraction"));

            let tags = entry["tags"]
                .as_array()
                .map(|values| {
                    values
                        .iter()
                        .filter_map(|v| v.as_str())
                        .map(|s| s.to_lowercase())
                        .collect::<Vec<_>>()
                })
                .filter(|tags| !tags.is_empty())
                .unwrap_or_else(|| {
                    vec![
                        destination.to_lowercase(),
                        place_type.as_str().to_string(),
                        "llm".to_string(),
                    ]
                });

            Some(Recommendation {
                id: format!("llm-{}-{}", stamp, index),
                name: name.to_string(),
                place_type,
                description: entry["description"]
                    .as_str()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| format!("Visit {} in {}", name, destination)),
                image: PLACEHOLDER_IMAGE.to_string(),
                rating: entry["estimatedRating"].as_f64().unwrap_or(4.0),
                address: entry["address"].as_str().unwrap_or(destination).to_string(),
                tags,
                coordinates: None,
                qloo_score: None,
            })
        })
        .collect()
}
