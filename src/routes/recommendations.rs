use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::models::itinerary::SearchState;
use crate::models::recommendation::UserPreferences;
use crate::services::llm_service::LlmService;
use crate::services::recommendation_service::RecommendationService;
use crate::storage::stores::ClientState;

/*
    POST /api/recommendations
*/
pub async fn get_recommendations(
    service: web::Data<RecommendationService>,
    state: web::Data<ClientState>,
    input: web::Json<UserPreferences>,
) -> impl Responder {
    let preferences = input.into_inner();

    if preferences.destination.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Destination is required" }));
    }

    let recommendations = service.get_enhanced_recommendations(&preferences).await;
    println!("Generated {} recommendations", recommendations.len());

    state.save_search(&SearchState {
        destination: preferences.destination.clone(),
        preferences: preferences.preferences.clone(),
        selected_categories: preferences.selected_categories.clone(),
        recommendations: recommendations.clone(),
        last_search_time: Utc::now().timestamp_millis(),
    });

    HttpResponse::Ok().json(json!({
        "recommendations": recommendations,
        "success": true,
        "count": recommendations.len(),
    }))
}

/*
    GET /api/recommendations/last
*/
pub async fn last_search(state: web::Data<ClientState>) -> impl Responder {
    match state.last_search() {
        Some(search) => HttpResponse::Ok().json(search),
        None => HttpResponse::NotFound().json(json!({ "error": "No recent search" })),
    }
}

/*
    POST /api/recommendations/llm
*/
pub async fn llm_recommendations(
    llm: web::Data<LlmService>,
    input: web::Json<UserPreferences>,
) -> impl Responder {
    let preferences = input.into_inner();

    if preferences.destination.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Destination is required" }));
    }

    let recommendations = llm.generate_recommendations(&preferences).await;

    HttpResponse::Ok().json(json!({
        "recommendations": recommendations,
        "success": true,
        "count": recommendations.len(),
    }))
}
