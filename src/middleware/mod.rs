//! Middleware del sistema
//!
//! Por ahora solo CORS; el logging de requests lo hace `TraceLayer`.

pub mod cors;

pub use cors::cors_layer;
