use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check() -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let qloo_result = check_qloo_key();
    health.services.insert("qloo".to_string(), qloo_result.clone());

    health
        .services
        .insert("llm".to_string(), check_llm_key());

    health
        .services
        .insert("storage".to_string(), check_storage());

    // The LLM path is optional; only a missing Qloo key degrades us.
    if qloo_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_qloo_key() -> ServiceStatus {
    match env::var("QLOO_API_KEY") {
        Ok(key) => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("Qloo API key configured ({})", masked_key)),
            }
        }
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some("QLOO_API_KEY not configured".to_string()),
        },
    }
}

fn check_llm_key() -> ServiceStatus {
    match env::var("OPENAI_API_KEY") {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("LLM recommendations enabled".to_string()),
        },
        Err(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("OPENAI_API_KEY not set, LLM path disabled".to_string()),
        },
    }
}

fn check_storage() -> ServiceStatus {
    match env::var("DATA_DIR") {
        Ok(dir) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("File-backed state store at {}", dir)),
        },
        Err(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("In-memory state store (DATA_DIR not set)".to_string()),
        },
    }
}
