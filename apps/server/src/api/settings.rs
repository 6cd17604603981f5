//! Settings endpoints, the stand-in for the options page.
//!
//! GET pre-populates the form fields; PUT saves the API key and the
//! abbreviation preference.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use goldbadge_core::SettingsUpdate;

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsView {
    api_key: Option<String>,
    abbreviation: bool,
}

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<SettingsView>> {
    let ticker_state = state.store.get_state()?;
    Ok(Json(SettingsView {
        api_key: ticker_state.api_key,
        abbreviation: ticker_state.abbreviation,
    }))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> ApiResult<StatusCode> {
    state.store.update_settings(&update)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/settings", get(get_settings).put(update_settings))
}
