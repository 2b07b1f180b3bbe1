//! Cart handlers
//!
//! Carts are keyed by an opaque session id supplied by the client.

use crate::error::{parse_id, require_session_id, ApiError, ApiResult};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use storefront_types::{AddToCartRequest, CartItemWithProduct, CartSummary, UpdateCartItemRequest};

const INVALID_ITEM_ID: &str = "Invalid cart item ID";
const SESSION_SEGMENT: &str = "session";

pub async fn list(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<Vec<CartItemWithProduct>>> {
    let session_id = require_session_id(&session_id)?;
    Ok(Json(state.cart.list(session_id).await))
}

pub async fn summary(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CartSummary>> {
    let session_id = require_session_id(&session_id)?;
    Ok(Json(state.cart.summary(session_id).await))
}

/// `GET /cart/session/summary` shares its shape with the clear route, so the
/// trailing segment is read as a sub-resource of the cart named `session`
pub async fn session_subresource(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> ApiResult<Json<CartSummary>> {
    match resource.as_str() {
        "summary" => Ok(Json(state.cart.summary(SESSION_SEGMENT).await)),
        _ => Err(ApiError::NotFound("Cart resource not found")),
    }
}

pub async fn add(
    State(state): State<AppState>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CartItemWithProduct>)> {
    const INVALID: &str = "Invalid cart item data";

    let Json(req) = body.map_err(|e| ApiError::invalid_body(INVALID, e.body_text()))?;
    let item = req
        .validate()
        .map_err(|e| ApiError::validation(INVALID, e))?;

    let line = state.cart.add(item).await;
    Ok((StatusCode::CREATED, Json(line)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateCartItemRequest>, JsonRejection>,
) -> ApiResult<Json<CartItemWithProduct>> {
    const INVALID: &str = "Invalid quantity";

    let id = parse_id(&id, INVALID_ITEM_ID)?;
    let Json(req) = body.map_err(|e| ApiError::invalid_body(INVALID, e.body_text()))?;
    let quantity = req
        .validate()
        .map_err(|e| ApiError::validation(INVALID, e))?;

    state
        .cart
        .update_quantity(id, quantity)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Cart item not found"))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id, INVALID_ITEM_ID)?;
    state.cart.remove(id).await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<StatusCode> {
    let session_id = require_session_id(&session_id)?;
    state.cart.clear(session_id).await;
    Ok(StatusCode::NO_CONTENT)
}
