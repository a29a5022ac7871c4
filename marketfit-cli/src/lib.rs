//! Command implementations behind the `marketfit` binary.

pub mod app;
pub mod commands;
pub mod render;

pub use app::App;
