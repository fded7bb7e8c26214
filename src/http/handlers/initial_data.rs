use crate::lookup::initial_data;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_initial_data() -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(initial_data()))
}
