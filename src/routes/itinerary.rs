use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::models::itinerary::{Itinerary, ItineraryItem};
use crate::models::recommendation::{PlaceType, Recommendation, UserPreferences};
use crate::storage::stores::ClientState;

#[derive(Debug, Deserialize)]
pub struct CreateItineraryRequest {
    pub preferences: UserPreferences,
    #[serde(rename = "selectedSpots")]
    pub selected_spots: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub struct SaveItineraryRequest {
    pub itinerary: Itinerary,
}

#[derive(Debug, Deserialize)]
pub struct ShareItineraryRequest {
    #[serde(rename = "itineraryId")]
    pub itinerary_id: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct NewItineraryItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "itineraryId")]
    pub itinerary_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub folder: Option<String>,
}

/*
    POST /api/itinerary
*/
pub async fn create_itinerary(input: web::Json<CreateItineraryRequest>) -> impl Responder {
    let request = input.into_inner();

    let itinerary = Itinerary {
        id: Uuid::new_v4().to_string(),
        destination: request.preferences.destination.clone(),
        total_days: request.preferences.number_of_days,
        preferences: request.preferences,
        spots: request.selected_spots,
        created_at: Utc::now(),
    };

    HttpResponse::Ok().json(json!({ "itinerary": itinerary }))
}

/*
    POST /api/itinerary/save
*/
pub async fn save_itinerary(
    state: web::Data<ClientState>,
    input: web::Json<SaveItineraryRequest>,
) -> impl Responder {
    let request = input.into_inner();
    state.save_itinerary(&request.itinerary);

    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Itinerary saved successfully",
    }))
}

/*
    POST /api/itinerary/share
*/
pub async fn share_itinerary(input: web::Json<ShareItineraryRequest>) -> impl Responder {
    let request = input.into_inner();
    println!(
        "Sharing itinerary {} with {}",
        request.itinerary_id, request.email
    );

    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Itinerary shared successfully",
    }))
}

/*
    GET /api/itinerary/items?folder={id}
*/
pub async fn get_items(
    state: web::Data<ClientState>,
    query: web::Query<ItemQuery>,
) -> impl Responder {
    let items = match &query.folder {
        Some(folder_id) => state.itinerary_items_for_folder(folder_id),
        None => state.itinerary_items(),
    };
    HttpResponse::Ok().json(items)
}

/*
    POST /api/itinerary/items

    A duplicate add is rejected with 409 so the caller can surface it.
*/
pub async fn add_item(
    state: web::Data<ClientState>,
    input: web::Json<NewItineraryItem>,
) -> impl Responder {
    let request = input.into_inner();

    let item = ItineraryItem {
        id: request.id,
        name: request.name,
        place_type: request.place_type,
        description: request.description,
        image: request.image,
        rating: request.rating,
        address: request.address,
        tags: request.tags,
        added_at: Utc::now(),
        itinerary_id: request.itinerary_id.unwrap_or_else(|| "default".to_string()),
    };

    match state.add_itinerary_item(item) {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(err) => HttpResponse::Conflict().json(json!({ "error": err.to_string() })),
    }
}

/*
    DELETE /api/itinerary/items/{id}
*/
pub async fn remove_item(
    state: web::Data<ClientState>,
    path: web::Path<String>,
) -> impl Responder {
    state.remove_itinerary_item(&path.into_inner());
    HttpResponse::Ok().json(json!({ "success": true }))
}
