//! # API Shared
//!
//! Shared definitions for the CUI front ends.
//!
//! Contains:
//! - Request/response types (`dto` module), serialised as camelCase JSON
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `cui-cli` so both print and accept the same shapes.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
