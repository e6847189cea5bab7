//! POST /tokenize - split raw text into words.

use std::sync::Arc;

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use thai_lexicon_core::Segmenter;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct TokenizeRequest {
    /// Missing or null text is tokenized as the empty string.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeResponse {
    pub tokens: Vec<String>,
}

/// POST /tokenize
///
/// Tokens come back in text order with whitespace dropped.
pub async fn tokenize(
    Extension(segmenter): Extension<Arc<dyn Segmenter>>,
    Json(req): Json<TokenizeRequest>,
) -> Json<TokenizeResponse> {
    let text = req.text.unwrap_or_default();
    let tokens = segmenter.segment(&text);
    debug!(
        "Tokenized {} chars into {} tokens",
        text.chars().count(),
        tokens.len()
    );
    Json(TokenizeResponse { tokens })
}
