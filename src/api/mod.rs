//! REST API module.
//!
//! Contains all API routes and handlers following the admin dashboard contract.

mod collections;
mod data;
mod views;

pub use collections::*;
pub use data::*;
pub use views::*;

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by every successful write.
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteAck {
    pub success: bool,
}

impl WriteAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of a per-collection write: `{ data: [...] }`.
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    /// Missing `data` decodes as null and is rejected as "not an array"
    #[serde(default)]
    pub data: Value,
}

/// Body of the generic write: `{ type, data }`.
#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Handler result: bare JSON on success, `{ error }` otherwise.
pub type ApiResult<T> = Result<Json<T>, crate::errors::AppError>;
