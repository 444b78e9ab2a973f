use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{ApiAuditRequest, ApiAuditResponse, ApiCatalogResponse, ApiCategoryResponse};
use viral_audit::config::AuditConfig;
use viral_audit::{analyze_competitor, audit_competitor, AuditError, Category, CategoryReport};

#[derive(Clone)]
struct AppState {
    config: Arc<AuditConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct AuditQuery {
    handle: Option<String>,
    platform: Option<String>,
    request_id: Option<String>,
}

impl From<AuditQuery> for ApiAuditRequest {
    fn from(query: AuditQuery) -> Self {
        ApiAuditRequest {
            handle: query.handle,
            platform: query.platform,
            categories: None,
            request_id: query.request_id,
        }
    }
}

type ApiError = (StatusCode, String);

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs, config: AuditConfig) -> Result<(), AuditError> {
    let app = router(config);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| AuditError::InvalidAddress(format!("{}:{} ({})", args.host, args.port, err)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "viral audit API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn router(config: AuditConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/platforms", get(platforms))
        .route("/api/audit", get(audit_query_handler).post(audit_handler))
        .route("/api/audit/:category", get(category_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn platforms() -> Json<ApiCatalogResponse> {
    Json(ApiCatalogResponse::build())
}

async fn audit_query_handler(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> Result<Json<ApiAuditResponse>, ApiError> {
    run_audit(&state, ApiAuditRequest::from(query)).await
}

async fn audit_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAuditRequest>,
) -> Result<Json<ApiAuditResponse>, ApiError> {
    run_audit(&state, request).await
}

async fn run_audit(
    state: &AppState,
    request: ApiAuditRequest,
) -> Result<Json<ApiAuditResponse>, ApiError> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let audit_request = request.to_request().map_err(reject)?;
    let categories = request.categories().map_err(reject)?;

    let report = audit_competitor(&audit_request, &categories, &state.config).await;
    Ok(Json(ApiAuditResponse { request_id, report }))
}

async fn category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<AuditQuery>,
) -> Result<Json<ApiCategoryResponse>, ApiError> {
    let category = Category::parse(&category).map_err(reject)?;
    let request = ApiAuditRequest::from(query);
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let audit_request = request.to_request().map_err(reject)?;

    let items = analyze_competitor(&audit_request, category, &state.config).await;
    Ok(Json(ApiCategoryResponse::new(
        request_id,
        &audit_request,
        CategoryReport::new(category, items),
    )))
}

fn reject(err: AuditError) -> ApiError {
    warn!(error = %err, "rejected audit request");
    (StatusCode::BAD_REQUEST, err.to_string())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
