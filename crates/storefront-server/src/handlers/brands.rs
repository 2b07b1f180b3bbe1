//! Brand handlers

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use storefront_types::Brand;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Brand>> {
    Json(state.catalog.list_brands().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Brand>> {
    state
        .catalog
        .get_brand(&name)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Brand not found"))
}
