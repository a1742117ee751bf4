use axum::{
    Extension, Json, Router,
    extract::Query,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod category;
pub mod classifier;
pub mod confidence;
pub mod config;
pub mod error;
pub mod name;
pub mod parser;
pub mod price;

pub use category::{Category, CategoryTable};
pub use confidence::ConfidenceThresholds;
pub use config::{ParserConfig, ServerConfig};
pub use error::{Error, Result};
pub use parser::{MenuItem, MenuParser, ParseOutcome};
pub use price::{PriceNotation, PricePattern};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Deserialize)]
pub struct ParseTextParams {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct ParseTextResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub items: Vec<MenuItem>,
    pub confidence: f64,
    /// Seconds spent parsing.
    pub processing_time: f64,
    pub total_items: usize,
}

#[derive(Serialize, Deserialize)]
pub struct Endpoints {
    pub parse_text: String,
    pub health: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Menu OCR Parser API".to_string(),
        version: API_VERSION.to_string(),
        endpoints: Endpoints {
            parse_text: "/parse-text".to_string(),
            health: "/health".to_string(),
        },
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn parse_text(
    Extension(parser): Extension<Arc<MenuParser>>,
    Query(params): Query<ParseTextParams>,
) -> impl IntoResponse {
    let start = Instant::now();

    if params.text.trim().is_empty() {
        info!("parse-text called with blank text");
        return Json(ParseTextResponse {
            success: false,
            message: Some("No text found".to_string()),
            items: Vec::new(),
            confidence: 0.0,
            processing_time: start.elapsed().as_secs_f64(),
            total_items: 0,
        });
    }

    let outcome = parser.parse(&params.text);
    let processing_time = start.elapsed().as_secs_f64();
    info!(
        items = outcome.items.len(),
        confidence = outcome.confidence,
        processing_time,
        "parsed menu text"
    );

    Json(ParseTextResponse {
        success: true,
        message: None,
        total_items: outcome.items.len(),
        items: outcome.items,
        confidence: outcome.confidence,
        processing_time,
    })
}

pub fn build_router(parser: Arc<MenuParser>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/parse-text", post(parse_text))
        .layer(Extension(parser))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
}
