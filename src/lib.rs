//! Parc IT equipment inventory
//!
//! A Rust REST API server keeping the equipment of an organisation's
//! directions and offices, with filtering, statistics and a small
//! rule-based assistant over the inventory.

use std::sync::Arc;

pub mod api;
pub mod assistant;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
