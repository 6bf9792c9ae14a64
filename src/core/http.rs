//! HTTP endpoint server using Axum

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{IndicatorConfig, ServerConfig};
use crate::indicators::engine::compute_bundle_from_bars;
use crate::indicators::error::IndicatorError;
use crate::indicators::parser::parse_config_from_map;
use crate::metrics::Metrics;
use crate::models::indicators::{IndicatorBundle, IndicatorSnapshot, PriceBar};
use crate::services::market_data::{MarketDataError, MarketDataProvider};

pub const SERVICE_NAME: &str = "indicator-engine";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn MarketDataProvider + Send + Sync>,
    pub indicator_config: IndicatorConfig,
    pub candle_limit: usize,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error response carrying a JSON `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl std::fmt::Display) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    fn from_market_data(err: MarketDataError, symbol: &str) -> Self {
        match err {
            MarketDataError::UnknownSymbol(_) => Self::new(StatusCode::NOT_FOUND, err),
            MarketDataError::InvalidBars(_) | MarketDataError::Malformed(_) => {
                error!(error = %err, symbol = %symbol, "Provider returned unusable bars");
                Self::new(StatusCode::BAD_GATEWAY, err)
            }
        }
    }
}

impl From<IndicatorError> for ApiError {
    fn from(err: IndicatorError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

fn compute(
    state: &AppState,
    bars: &[PriceBar],
    config: &IndicatorConfig,
) -> Result<IndicatorBundle, IndicatorError> {
    let start = Instant::now();
    let bundle = compute_bundle_from_bars(bars, config)?;

    state.metrics.indicator_bundles_total.inc();
    state
        .metrics
        .indicator_computation_duration_seconds
        .observe(start.elapsed().as_secs_f64());

    Ok(bundle)
}

#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub bars: Vec<PriceBar>,
    #[serde(default)]
    pub config: Option<IndicatorConfig>,
}

/// Compute indicators over bars supplied in the request body
async fn compute_indicators(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Result<Json<IndicatorBundle>, ApiError> {
    let config = request.config.unwrap_or(state.indicator_config);
    let bundle = compute(&state, &request.bars, &config)?;
    Ok(Json(bundle))
}

async fn bundle_for_symbol(
    state: &AppState,
    symbol: &str,
    params: &HashMap<String, String>,
) -> Result<IndicatorBundle, ApiError> {
    let config = parse_config_from_map(params, state.indicator_config)?;

    let bars = state
        .provider
        .get_bars(symbol, state.candle_limit)
        .await
        .map_err(|e| ApiError::from_market_data(e, symbol))?;

    if bars.is_empty() {
        warn!(symbol = %symbol, "No bars available");
    }

    Ok(compute(state, &bars, &config)?)
}

/// Compute indicators over the provider's history for a symbol
async fn symbol_indicators(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<IndicatorBundle>, ApiError> {
    bundle_for_symbol(&state, &symbol, &params).await.map(Json)
}

/// Newest value of each indicator for a symbol
async fn latest_indicators(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<IndicatorSnapshot>, ApiError> {
    let bundle = bundle_for_symbol(&state, &symbol, &params).await?;
    Ok(Json(bundle.latest()))
}

async fn list_symbols(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "symbols": state.provider.symbols().await }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/indicators", post(compute_indicators))
        .route("/api/symbols", get(list_symbols))
        .route("/api/indicators/{symbol}", get(symbol_indicators))
        .route("/api/indicators/{symbol}/latest", get(latest_indicators))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: ServerConfig,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        provider,
        indicator_config: config.indicators,
        candle_limit: config.candle_limit,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
