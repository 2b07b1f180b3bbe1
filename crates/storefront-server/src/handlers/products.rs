//! Product handlers

use crate::error::{parse_id, ApiError, ApiResult};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::{Query, QueryRejection};
use storefront_types::{Product, ProductFilter};

/// `GET /api/products`, optionally narrowed by query string filters
pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<ProductFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(filter) = filter.map_err(|e| ApiError::invalid_body("Invalid product filter", e))?;
    filter
        .validate()
        .map_err(|e| ApiError::validation("Invalid product filter", e))?;

    Ok(Json(state.catalog.filter_products(&filter).await))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id, "Invalid product ID")?;

    state
        .catalog
        .get_product(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Product not found"))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.catalog.products_by_category(&category).await)
}

pub async fn by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.catalog.products_by_brand(&brand).await)
}

pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.featured_products().await)
}

pub async fn new_arrivals(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.new_arrivals().await)
}

pub async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.catalog.search_products(&query).await)
}
