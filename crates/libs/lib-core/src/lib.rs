//! # Core Library
//!
//! Configuration, error taxonomy, DTOs with their schema validation, and the
//! user store.

pub mod config;
pub mod error;
pub mod model;
pub mod dto;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorStatusMode, Result};
pub use model::store::{DbPool, create_pool, migrate};
