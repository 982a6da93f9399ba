use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/active-date", put(handlers::select_date))
        .route("/api/days/:date", get(handlers::get_day).patch(handlers::patch_day))
        .route("/api/weekly", get(handlers::get_weekly))
        .route("/api/trend", get(handlers::get_trend))
        .route("/api/goal", get(handlers::get_goal).put(handlers::put_goal))
        .route("/api/export", get(handlers::export))
        .route("/api/import", post(handlers::import))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
