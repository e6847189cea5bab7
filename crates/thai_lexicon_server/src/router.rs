//! Router construction for the tokenization server.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use thai_lexicon_core::Segmenter;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the axum router with all routes and middleware.
pub fn build_router(segmenter: Arc<dyn Segmenter>) -> Router {
    Router::new()
        .route("/tokenize", post(handlers::tokenize::tokenize))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(segmenter))
}
