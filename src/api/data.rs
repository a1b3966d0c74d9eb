//! Aggregate endpoints over every collection.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{ApiResult, DispatchRequest, WriteAck};
use crate::errors::AppError;
use crate::models::{Collection, Portfolio};
use crate::sync;
use crate::AppState;

/// GET /api/data - All six collections in one object.
pub async fn get_portfolio(State(state): State<AppState>) -> ApiResult<Portfolio> {
    let portfolio = sync::read_portfolio(&state.store).await?;
    Ok(Json(portfolio))
}

/// POST /api/data - Replace the collection named by `type`.
pub async fn sync_by_type(
    State(state): State<AppState>,
    payload: Result<Json<DispatchRequest>, JsonRejection>,
) -> ApiResult<WriteAck> {
    let Json(request) = payload?;

    let kind = request
        .kind
        .ok_or_else(|| AppError::BadRequest("Missing data type".to_string()))?;
    let collection = Collection::parse(&kind)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid data type: {}", kind)))?;

    sync::sync_dispatch(&state.store, collection, request.data).await?;
    Ok(Json(WriteAck::ok()))
}
