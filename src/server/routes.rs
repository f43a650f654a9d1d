use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{Announcement, Recipe};

use super::state::AppState;

pub const BANNER: &str =
    "Welcome to the classboard API! Available endpoints: /announcements, /recipes";

pub async fn home_handler() -> &'static str {
    BANNER
}

pub async fn announcements_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.repository.get_all_announcements().await?;
    Ok(Json(announcements))
}

pub async fn recipes_handler(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Recipe>>> {
    let recipes = state.repository.get_all_recipes().await?;
    Ok(Json(recipes))
}
