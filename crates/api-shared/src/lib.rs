//! # API Shared
//!
//! Shared utilities and definitions for the plant APIs.
//!
//! Contains:
//! - Wire types for responses that are not plant documents (`types` module)
//! - The liveness `HealthService`
//! - API key validation
//!
//! Used by `api-rest` and the `plant-run` binary.

pub mod auth;
pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
