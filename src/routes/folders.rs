use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::storage::stores::ClientState;

#[derive(Debug, Deserialize)]
pub struct NewFolder {
    pub name: String,
    pub destination: String,
    pub description: Option<String>,
}

/*
    GET /api/folders
*/
pub async fn get_folders(state: web::Data<ClientState>) -> impl Responder {
    HttpResponse::Ok().json(state.folders())
}

/*
    POST /api/folders
*/
pub async fn create_folder(
    state: web::Data<ClientState>,
    input: web::Json<NewFolder>,
) -> impl Responder {
    let request = input.into_inner();

    if request.name.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Folder name is required" }));
    }

    let folder = state.create_folder(&request.name, &request.destination, request.description);
    HttpResponse::Ok().json(folder)
}

/*
    DELETE /api/folders/{id}

    Removes the folder along with its itinerary items.
*/
pub async fn delete_folder(
    state: web::Data<ClientState>,
    path: web::Path<String>,
) -> impl Responder {
    state.delete_folder(&path.into_inner());
    HttpResponse::Ok().json(json!({ "success": true }))
}
