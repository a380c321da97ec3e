use actix_web::{HttpResponse, Responder};
use serde_json::json;

/*
    GET /api/travel-tips
*/
pub async fn get_travel_tips() -> impl Responder {
    let tips = [
        "Research local customs and etiquette before your trip",
        "Download offline maps and translation apps",
        "Notify your bank about travel plans to avoid card issues",
        "Pack light and bring versatile clothing",
        "Keep copies of important documents in separate places",
        "Learn basic phrases in the local language",
    ];

    HttpResponse::Ok().json(json!({ "tips": tips }))
}
