use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use wayfare_api::models::provider::SearchResponse;
use wayfare_api::routes;
use wayfare_api::services::llm_service::LlmService;
use wayfare_api::services::qloo_client::QlooError;
use wayfare_api::services::recommendation_service::{RecommendationService, SearchProvider};
use wayfare_api::storage::kv::MemoryStore;
use wayfare_api::storage::stores::ClientState;

/// Provider that always returns no results, pushing every search to the
/// fallback generator.
struct EmptyProvider;

#[async_trait]
impl SearchProvider for EmptyProvider {
    async fn search(&self, _query: &str, _limit: u32) -> Result<SearchResponse, QlooError> {
        Ok(SearchResponse::default())
    }
}

macro_rules! test_app {
    () => {{
        let service = web::Data::new(RecommendationService::new(Arc::new(EmptyProvider)));
        let llm = web::Data::new(LlmService::new(None));
        let state = web::Data::new(ClientState::new(Arc::new(MemoryStore::new())));

        test::init_service(
            App::new()
                .app_data(service)
                .app_data(llm)
                .app_data(state)
                .route("/health", web::get().to(routes::health::health_check))
                .service(
                    web::scope("/api")
                        .service(
                            web::scope("/recommendations")
                                .route(
                                    "",
                                    web::post().to(routes::recommendations::get_recommendations),
                                )
                                .route(
                                    "/last",
                                    web::get().to(routes::recommendations::last_search),
                                )
                                .route(
                                    "/llm",
                                    web::post().to(routes::recommendations::llm_recommendations),
                                ),
                        )
                        .service(
                            web::scope("/itinerary")
                                .route("", web::post().to(routes::itinerary::create_itinerary))
                                .route("/save", web::post().to(routes::itinerary::save_itinerary))
                                .route(
                                    "/share",
                                    web::post().to(routes::itinerary::share_itinerary),
                                )
                                .route("/items", web::get().to(routes::itinerary::get_items))
                                .route("/items", web::post().to(routes::itinerary::add_item))
                                .route(
                                    "/items/{id}",
                                    web::delete().to(routes::itinerary::remove_item),
                                ),
                        )
                        .service(
                            web::scope("/favorites")
                                .route("", web::get().to(routes::favorites::get_favorites))
                                .route("", web::post().to(routes::favorites::add_favorite))
                                .route(
                                    "/{id}",
                                    web::delete().to(routes::favorites::remove_favorite),
                                ),
                        )
                        .service(
                            web::scope("/folders")
                                .route("", web::get().to(routes::folders::get_folders))
                                .route("", web::post().to(routes::folders::create_folder))
                                .route("/{id}", web::delete().to(routes::folders::delete_folder)),
                        )
                        .route(
                            "/travel-tips",
                            web::get().to(routes::travel_tips::get_travel_tips),
                        ),
                ),
        )
        .await
    }};
}

#[actix_web::test]
async fn health_endpoint_reports_status() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["status"].is_string());
    assert!(body["services"]["qloo"].is_object());
}

#[actix_web::test]
async fn recommendations_require_a_destination() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({ "destination": "  " }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Destination is required");
}

#[actix_web::test]
async fn recommendations_always_come_back_for_a_destination() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({ "destination": "Kyoto", "selectedCategories": ["museums"] }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let count = body["count"].as_u64().unwrap();
    assert!(count > 0);
    assert_eq!(body["recommendations"].as_array().unwrap().len() as u64, count);

    // The search is now cached and retrievable.
    let req = test::TestRequest::get()
        .uri("/api/recommendations/last")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let cached: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(cached["destination"], "Kyoto");
}

#[actix_web::test]
async fn last_search_is_404_before_any_search() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/recommendations/last")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn llm_route_returns_empty_success_when_unconfigured() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/recommendations/llm")
        .set_json(&json!({ "destination": "Kyoto" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
}

#[actix_web::test]
async fn itinerary_create_save_and_share() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/itinerary")
        .set_json(&json!({
            "preferences": { "destination": "Kyoto", "numberOfDays": 4 },
            "selectedSpots": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    let itinerary = body["itinerary"].clone();
    assert_eq!(itinerary["destination"], "Kyoto");
    assert_eq!(itinerary["totalDays"], 4);

    let req = test::TestRequest::post()
        .uri("/api/itinerary/save")
        .set_json(&json!({ "itinerary": itinerary }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::post()
        .uri("/api/itinerary/share")
        .set_json(&json!({ "itineraryId": "abc", "email": "friend@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn duplicate_itinerary_item_returns_conflict() {
    let app = test_app!();

    let item = json!({
        "id": "spot-1",
        "name": "Fushimi Inari",
        "type": "attraction",
        "description": "Torii gates",
        "itineraryId": "default"
    });

    let req = test::TestRequest::post()
        .uri("/api/itinerary/items")
        .set_json(&item)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/itinerary/items")
        .set_json(&item)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Fushimi Inari"));

    let req = test::TestRequest::get()
        .uri("/api/itinerary/items")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let items: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(items.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn favorite_add_is_idempotent_over_http() {
    let app = test_app!();

    let favorite = json!({
        "id": "fav-1",
        "name": "Nishiki Market",
        "type": "shopping",
        "description": "Food stalls"
    });

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/favorites")
            .set_json(&favorite)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get().uri("/api/favorites").to_request();
    let resp = test::call_service(&app, req).await;
    let favorites: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(favorites.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn folders_can_be_created_and_deleted() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/folders")
        .set_json(&json!({ "name": "Japan 2026", "destination": "Kyoto" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let folder: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(folder["itemCount"], 0);
    let folder_id = folder["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/folders/{}", folder_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/api/folders").to_request();
    let resp = test::call_service(&app, req).await;
    let folders: serde_json::Value = test::read_body_json(resp).await;
    assert!(folders.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn folder_creation_requires_a_name() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/folders")
        .set_json(&json!({ "name": "", "destination": "Kyoto" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn travel_tips_are_served() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/travel-tips").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body["tips"].as_array().unwrap().is_empty());
}
