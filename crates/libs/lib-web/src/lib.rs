//! # Web Library
//!
//! HTTP handlers, middleware, routes, services and server startup for the
//! user registration/authentication API.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod server;

pub use routes::create_router;
pub use server::{init_tracing, start_server, AppState};
