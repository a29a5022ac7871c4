//! # marketfit-observability
//!
//! Subscriber setup for the binary edge, plus the span macros and structured
//! events the library crates emit.

pub mod tracing_setup;

pub use tracing_setup::{
    default_filter, init_tracing, init_tracing_json, init_tracing_with_filter, DEFAULT_FILTER,
    LOG_ENV_VAR,
};
