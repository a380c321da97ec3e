use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wayfare_api::routes;
use wayfare_api::services::llm_service::LlmService;
use wayfare_api::services::qloo_client::QlooClient;
use wayfare_api::services::recommendation_service::RecommendationService;
use wayfare_api::storage::kv::{FileStore, KeyValueStore, MemoryStore};
use wayfare_api::storage::stores::ClientState;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let qloo = QlooClient::from_env().expect("QLOO_API_KEY must be set");
    let service = web::Data::new(RecommendationService::new(Arc::new(qloo)));
    let llm = web::Data::new(LlmService::from_env());

    let store: Arc<dyn KeyValueStore> = match env::var("DATA_DIR") {
        Ok(dir) => {
            println!("Persisting client state under {}", dir);
            Arc::new(FileStore::new(dir))
        }
        Err(_) => {
            println!("DATA_DIR not set, using in-memory client state");
            Arc::new(MemoryStore::new())
        }
    };
    let state = web::Data::new(ClientState::new(store));

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(service.clone())
            .app_data(llm.clone())
            .app_data(state.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/recommendations")
                            .route(
                                "",
                                web::post().to(routes::recommendations::get_recommendations),
                            )
                            .route("/last", web::get().to(routes::recommendations::last_search))
                            .route(
                                "/llm",
                                web::post().to(routes::recommendations::llm_recommendations),
                            ),
                    )
                    .service(
                        web::scope("/itinerary")
                            .route("", web::post().to(routes::itinerary::create_itinerary))
                            .route("/save", web::post().to(routes::itinerary::save_itinerary))
                            .route("/share", web::post().to(routes::itinerary::share_itinerary))
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
                            .route("/{id}", web::delete().to(routes::favorites::remove_favorite)),
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
            )
    })
    .bind((host, port))?
    .run()
    .await
}
