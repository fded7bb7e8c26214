pub mod config;
pub mod domain {
    pub mod analysis;
    pub mod error;
}
pub mod http {
    pub mod handlers {
        pub mod analyze;
        pub mod initial_data;
        pub mod ops;
    }
    pub mod router;
}
pub mod lookup;
pub mod repo {
    pub mod results_repo;
}
pub mod scoring;
pub mod service {
    pub mod analysis_service;
}

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: service::analysis_service::AnalysisService,
}
