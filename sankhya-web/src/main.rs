use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use sankhya::{Namer, NamerOptions, NumberReport, NumeralError, SanskritNumber};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Serialize, Deserialize)]
pub struct NameRequest {
    /// ASCII or Devanagari digits
    pub input: String,
    pub connective_before_first: Option<bool>,
    pub keep_empty_tokens: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct AddRequest {
    pub a: String,
    pub b: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, Default)]
pub struct AppState {
    /// Naming options used when a request does not override them
    pub options: NamerOptions,
}

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `SANKHYA_WEB_ADDR`, falling back to 127.0.0.1:3000
    pub fn from_env() -> Result<Self, String> {
        let raw = env::var("SANKHYA_WEB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw
            .parse()
            .map_err(|e| format!("Invalid SANKHYA_WEB_ADDR '{}': {}", raw, e))?;
        Ok(ServerConfig { addr })
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = app(AppState::default());

    info!("Starting sankhya web server");

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Server running at http://{}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/name", post(name_number))
        .route("/api/add", post(add_numbers))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn name_number(
    State(state): State<AppState>,
    Json(request): Json<NameRequest>,
) -> Result<Json<NumberReport>, ApiError> {
    info!("Naming '{}'", &request.input);

    let mut options = state.options;
    if let Some(enabled) = request.connective_before_first {
        options = options.with_connective_before_first(enabled);
    }
    if let Some(keep) = request.keep_empty_tokens {
        options = options.with_empty_tokens(keep);
    }

    let number = parse_number(&request.input)?;
    let report = NumberReport::new(&number, &Namer::with_options(options)).map_err(bad_request)?;
    Ok(Json(report))
}

async fn add_numbers(
    State(state): State<AppState>,
    Json(request): Json<AddRequest>,
) -> Result<Json<NumberReport>, ApiError> {
    info!("Adding '{}' and '{}'", &request.a, &request.b);

    let a = parse_number(&request.a)?;
    let b = parse_number(&request.b)?;
    let sum = a.checked_add(&b).map_err(bad_request)?;
    let report = NumberReport::new(&sum, &Namer::with_options(state.options)).map_err(bad_request)?;
    Ok(Json(report))
}

fn parse_number(input: &str) -> Result<SanskritNumber, ApiError> {
    input.parse::<SanskritNumber>().map_err(bad_request)
}

fn bad_request(error: NumeralError) -> ApiError {
    warn!("Rejected request: {}", error);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
