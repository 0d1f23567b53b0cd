//! # Data Transfer Objects
//!
//! Request and response shapes for the HTTP API, plus the validators that turn
//! raw requests into constraint-satisfying inputs.

pub mod auth;

pub use auth::{
    ErrorResponse, LoginInput, LoginRequest, LoginResponse, RegisterInput, RegisterRequest,
    RegisterResponse, UserInfo,
};
