use circuit_scorer::config::AppConfig;
use circuit_scorer::http::router::build_router;
use circuit_scorer::repo::results_repo::{ResultsRepo, ResultsStore};
use circuit_scorer::service::analysis_service::AnalysisService;
use circuit_scorer::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let store: Option<Arc<dyn ResultsStore>> = match &cfg.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(cfg.db_max_connections)
                .connect_lazy(url)?;
            if cfg.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
            }
            Some(Arc::new(ResultsRepo { pool }))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; /api/analyze will fail until it is configured");
            None
        }
    };

    let state = AppState {
        analysis_service: AnalysisService::new(store),
    };
    let app = build_router(state, &cfg.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
