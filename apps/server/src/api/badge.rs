use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use goldbadge_core::Trigger;

use crate::main_lib::AppState;
use crate::surface::BadgeSnapshot;

/// Current badge render, whichever variant the deployment uses.
async fn get_badge(State(state): State<Arc<AppState>>) -> Json<BadgeSnapshot> {
    Json(state.surface.snapshot())
}

/// Current composited icon, for status-bar integrations that embed images.
async fn get_icon(State(state): State<Arc<AppState>>) -> Response {
    match state.surface.snapshot().icon_svg {
        Some(svg) => ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// The icon click: force a refresh, bypassing the elapsed-time gate.
async fn refresh(State(state): State<Arc<AppState>>) -> StatusCode {
    state.scheduler.trigger(Trigger::Click).await;
    StatusCode::ACCEPTED
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/badge", get(get_badge))
        .route("/api/badge/icon.svg", get(get_icon))
        .route("/api/refresh", post(refresh))
}
