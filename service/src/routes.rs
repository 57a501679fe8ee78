use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use parser::ProductionRecord;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<Vec<ProductionRecord>>,
}

pub fn create_routes(records: Vec<ProductionRecord>) -> Router {
    let state = AppState {
        records: Arc::new(records),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/dailyproduction", get(get_daily_production))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Serve the full collection loaded at startup. No parameters, no paging;
/// the records never change for the lifetime of the process.
async fn get_daily_production(State(state): State<AppState>) -> Json<Vec<ProductionRecord>> {
    debug!("Serving {} production records", state.records.len());
    Json(state.records.as_ref().clone())
}
