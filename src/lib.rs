// src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod files;
pub mod languages;
pub mod output;
pub mod stats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
