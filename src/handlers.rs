use crate::errors::AppError;
use crate::models::{
    DailyRecord, DayPatch, Goal, ResetRequest, SelectDateRequest, StateResponse, TrendChart,
    WeeklyQuery, WeeklySummary,
};
use crate::state::AppState;
use crate::stats::{parse_date, summarize_week, today_key, trend_chart, workout_plan};
use crate::storage::{clear_days, persist_active_date, persist_days, persist_goal};
use crate::store::RecordStore;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Datelike;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(store.active_date()))
}

pub async fn get_state(State(state): State<AppState>) -> Result<Json<StateResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(state_response(&store)?))
}

pub async fn select_date(
    State(state): State<AppState>,
    Json(payload): Json<SelectDateRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let date = payload.date.trim();
    parse_date(date)?;

    let mut store = state.store.lock().await;
    if store.select_date(date) {
        persist_days(&state.blob, &store).await;
    }
    persist_active_date(&state.blob, &store).await;

    Ok(Json(state_response(&store)?))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DailyRecord>, AppError> {
    parse_date(&date)?;
    let store = state.store.lock().await;
    Ok(Json(store.get(&date)))
}

pub async fn patch_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(patch): Json<DayPatch>,
) -> Result<Json<DailyRecord>, AppError> {
    parse_date(&date)?;

    let mut store = state.store.lock().await;
    let updated = store.upsert(&date, patch).clone();
    persist_days(&state.blob, &store).await;

    Ok(Json(updated))
}

pub async fn get_weekly(
    State(state): State<AppState>,
    Query(query): Query<WeeklyQuery>,
) -> Result<Json<WeeklySummary>, AppError> {
    let store = state.store.lock().await;
    let reference = match query.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => parse_date(store.active_date())?,
    };
    Ok(Json(summarize_week(store.days(), reference)))
}

pub async fn get_trend(State(state): State<AppState>) -> Json<TrendChart> {
    let store = state.store.lock().await;
    Json(trend_chart(store.days(), store.goal()))
}

pub async fn get_goal(State(state): State<AppState>) -> Json<Goal> {
    let store = state.store.lock().await;
    Json(*store.goal())
}

pub async fn put_goal(
    State(state): State<AppState>,
    Json(goal): Json<Goal>,
) -> Json<Goal> {
    let mut store = state.store.lock().await;
    store.set_goal(goal);
    persist_goal(&state.blob, &store).await;
    Json(goal)
}

pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.lock().await;
    let body = store.export_snapshot()?;
    let disposition = format!("attachment; filename=\"{}\"", export_file_name(&today_key()));

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

pub async fn import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<StateResponse>, AppError> {
    let mut store = state.store.lock().await;
    if let Err(err) = store.import_snapshot(&body) {
        warn!("rejected import: {err}");
        return Err(err.into());
    }
    persist_goal(&state.blob, &store).await;
    persist_days(&state.blob, &store).await;
    info!("imported {} day records", store.days().len());

    Ok(Json(state_response(&store)?))
}

pub async fn reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<StateResponse>, AppError> {
    if !payload.confirm {
        return Err(AppError::bad_request("reset requires confirm: true"));
    }

    let mut store = state.store.lock().await;
    store.reset_all(&today_key());
    clear_days(&state.blob, &store).await;
    info!("cleared all day records");

    Ok(Json(state_response(&store)?))
}

pub fn export_file_name(date: &str) -> String {
    format!("cut-tracker-{date}.json")
}

fn state_response(store: &RecordStore) -> Result<StateResponse, AppError> {
    let active = store.active_date();
    let weekday = parse_date(active)?.weekday();
    Ok(StateResponse {
        active_date: active.to_string(),
        record: store.get(active),
        goal: *store.goal(),
        plan: workout_plan(weekday),
    })
}
