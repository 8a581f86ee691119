pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parsing::handlers as parsing;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/roles", get(scoring::handle_list_roles))
        // Resume API
        .route("/parse_resume", post(parsing::handle_parse_resume))
        .route("/classify_resume", post(scoring::handle_classify_resume))
        .route("/skill_gap", post(scoring::handle_skill_gap))
        .route("/ats_score", post(scoring::handle_ats_score))
        .route("/analyze_resume", post(scoring::handle_analyze_resume))
        .layer(body_limit)
        .with_state(state)
}
