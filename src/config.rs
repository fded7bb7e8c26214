pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://arobin09.github.io"];

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// `None` leaves the analysis endpoint answering with a configuration error.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub allowed_origins: Vec<String>,
    pub db_max_connections: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: var("DATABASE_URL").filter(|s| !s.trim().is_empty()),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:5000".to_string()),
            allowed_origins: var("ALLOWED_ORIGINS")
                .map(|s| parse_origins(&s))
                .filter(|origins| !origins.is_empty())
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(10),
            run_migrations: var("RUN_MIGRATIONS")
                .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
