//! Shared types for the Galley POS backend
//!
//! Common types used across crates: the unified error system and the
//! API response envelope.

pub mod error;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, InvalidErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
