//! Per-collection read and replace endpoints.
//!
//! One generic pair of handlers serves all six collections; the router picks the record type.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{ApiResult, SyncRequest, WriteAck};
use crate::models::Record;
use crate::sync;
use crate::AppState;

/// GET /api/data/{collection} - Full collection in canonical order.
pub async fn list_records<T: Record>(State(state): State<AppState>) -> ApiResult<Vec<T>> {
    let records = sync::read_collection::<T>(&state.store).await?;
    Ok(Json(records))
}

/// POST /api/data/{collection} - Replace the collection with `data`.
pub async fn sync_records<T: Record>(
    State(state): State<AppState>,
    payload: Result<Json<SyncRequest>, JsonRejection>,
) -> ApiResult<WriteAck> {
    let Json(request) = payload?;
    sync::sync_collection::<T>(&state.store, request.data).await?;
    Ok(Json(WriteAck::ok()))
}
