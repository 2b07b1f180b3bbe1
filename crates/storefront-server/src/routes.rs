//! HTTP router

use crate::error::ApiError;
use crate::handlers::{self, brands, cart, categories, products};
use crate::AppState;
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::path::PathBuf;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the full application router.
///
/// With `static_dir` set, unknown paths are served from that directory and
/// fall back to its `index.html` so the client can do its own routing.
pub fn router(state: AppState, static_dir: Option<&str>) -> Router {
    let mut app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api", api_routes());

    if let Some(dir) = static_dir {
        let index_path = PathBuf::from(dir).join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index_path)));
    }

    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/products/featured", get(products::featured))
        .route("/products/new-arrivals", get(products::new_arrivals))
        .route("/products/category/:category", get(products::by_category))
        .route("/products/brand/:brand", get(products::by_brand))
        .route("/products/search/:query", get(products::search))
        .route("/products/:id", get(products::get))
        .route("/brands", get(brands::list))
        .route("/brands/:name", get(brands::get))
        .route("/categories", get(categories::list))
        .route("/categories/:name", get(categories::get))
        .route("/cart", post(cart::add))
        .route(
            "/cart/session/:session_id",
            get(cart::session_subresource).delete(cart::clear),
        )
        .route(
            "/cart/:id",
            get(cart::list).put(cart::update).delete(cart::remove),
        )
        .route("/cart/:id/summary", get(cart::summary))
}

/// Text carried by a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal(format!("handler panicked: {}", panic_message(&*payload))).into_response()
}
