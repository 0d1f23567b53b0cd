//! # Model Layer
//!
//! Persistent entities and the store that reads and writes them.

pub mod store;
