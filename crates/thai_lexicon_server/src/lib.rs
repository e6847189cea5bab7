//! Thai tokenization REST server.
//!
//! ## Endpoints
//!
//! - `POST /tokenize` - `{ "text": "..." }` to `{ "tokens": [...] }`
//! - `GET /health` - `{ "status": "ok" }`
//!
//! Requests are independent; the segmenter is shared read-only.

pub mod handlers;
pub mod router;

pub use router::build_router;

/// Listen address when `THAI_TOKENIZER_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

pub fn bind_addr_from_env() -> String {
    std::env::var("THAI_TOKENIZER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
}
