use crate::http::handlers::{analyze, initial_data, ops};
use crate::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/api/initial-data", get(initial_data::get_initial_data))
        .route("/api/analyze", post(analyze::analyze_drivers))
        .layer(cors_layer(allowed_origins));

    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/liveness", get(ops::liveness))
        .route("/ops/readiness", get(ops::readiness))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
