pub mod fallback;
pub mod filters;
pub mod llm_service;
pub mod normalizer;
pub mod qloo_client;
pub mod query_strategy;
pub mod recommendation_service;
