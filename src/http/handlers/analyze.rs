use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn analyze_drivers(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match state.analysis_service.analyze(&body).await {
        Ok(ranked) => (axum::http::StatusCode::OK, Json(ranked)).into_response(),
        Err(e) => e.into_response(),
    }
}
