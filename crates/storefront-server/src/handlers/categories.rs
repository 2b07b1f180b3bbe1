//! Category handlers

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use storefront_types::Category;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog.list_categories().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Category>> {
    state
        .catalog
        .get_category(&name)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Category not found"))
}
