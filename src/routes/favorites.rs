use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::models::itinerary::FavoriteItem;
use crate::models::recommendation::PlaceType;
use crate::storage::stores::ClientState;

#[derive(Debug, Deserialize)]
pub struct NewFavorite {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
}

/*
    GET /api/favorites
*/
pub async fn get_favorites(state: web::Data<ClientState>) -> impl Responder {
    HttpResponse::Ok().json(state.favorites())
}

/*
    POST /api/favorites

    Adding an existing favorite is a no-op, not an error.
*/
pub async fn add_favorite(
    state: web::Data<ClientState>,
    input: web::Json<NewFavorite>,
) -> impl Responder {
    let request = input.into_inner();

    let added = state.add_favorite(FavoriteItem {
        id: request.id,
        name: request.name,
        place_type: request.place_type,
        description: request.description,
        image: request.image,
        added_at: Utc::now(),
    });

    let message = if added {
        "Added to favorites"
    } else {
        "Already in favorites"
    };
    HttpResponse::Ok().json(json!({ "success": true, "message": message }))
}

/*
    DELETE /api/favorites/{id}
*/
pub async fn remove_favorite(
    state: web::Data<ClientState>,
    path: web::Path<String>,
) -> impl Responder {
    state.remove_favorite(&path.into_inner());
    HttpResponse::Ok().json(json!({ "success": true }))
}
