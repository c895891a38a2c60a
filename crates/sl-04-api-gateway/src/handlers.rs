//! # Request Handlers
//!
//! Thin: parse, delegate to the backend, shape the response.

use crate::domain::error::ApiError;
use crate::domain::types::{
    AddressRequest, BlockView, RegisterStarRequest, SignatureValidationRequest,
    SignatureValidationResponse, StarSelector,
};
use crate::router::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use sl_01_chain_storage::ChainValidationReport;
use sl_02_request_mempool::ValidationRequestView;

/// Unwraps a JSON body, reporting any body problem as a 400.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| ApiError::InvalidInput(format!("invalid request body: {}", e.body_text())))
}

pub async fn get_block_by_height(
    State(state): State<AppState>,
    Path(height): Path<String>,
) -> Result<Json<BlockView>, ApiError> {
    let index: i64 = height.parse().map_err(|_| {
        ApiError::InvalidInput(format!("index value: {} is not a valid number", height))
    })?;
    // A negative index names a block that cannot exist.
    let height = u64::try_from(index)
        .map_err(|_| ApiError::NotFound(format!("block # {} does not exist", index)))?;

    let block = state.backend.block_by_height(height).await?;
    Ok(Json(BlockView::from(&block)))
}

pub async fn post_block(
    State(state): State<AppState>,
    payload: Result<Json<RegisterStarRequest>, JsonRejection>,
) -> Result<Json<BlockView>, ApiError> {
    let (address, star) = body(payload)?.validated()?;

    let block = state.backend.register_star(&address, star).await?;
    tracing::info!("[sl-04] ⭐ Star registered by {} at height {}", address, block.height);
    Ok(Json(BlockView::from(&block)))
}

pub async fn get_stars(
    State(state): State<AppState>,
    Path(selector): Path<String>,
) -> Result<Response, ApiError> {
    match StarSelector::parse(&selector)? {
        StarSelector::Hash(hash) => {
            let block = state
                .backend
                .block_by_hash(&hash)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("no block with hash {}", hash)))?;
            Ok(Json(BlockView::from(&block)).into_response())
        }
        StarSelector::Address(address) => {
            let blocks = state.backend.blocks_by_address(&address).await?;
            let views: Vec<BlockView> = blocks.iter().map(BlockView::from).collect();
            Ok(Json(views).into_response())
        }
    }
}

pub async fn post_request_validation(
    State(state): State<AppState>,
    payload: Result<Json<AddressRequest>, JsonRejection>,
) -> Result<Json<ValidationRequestView>, ApiError> {
    let address = body(payload)?.validated()?;
    let view = state.backend.request_validation(&address).await?;
    Ok(Json(view))
}

pub async fn post_validate_signature(
    State(state): State<AppState>,
    payload: Result<Json<SignatureValidationRequest>, JsonRejection>,
) -> Result<Json<SignatureValidationResponse>, ApiError> {
    let (address, signature) = body(payload)?.validated()?;
    let verified = state.backend.validate_signature(&address, &signature).await?;
    Ok(Json(verified.into()))
}

pub async fn get_validate_chain(
    State(state): State<AppState>,
) -> Result<Json<ChainValidationReport>, ApiError> {
    Ok(Json(state.backend.validate_chain().await?))
}

pub async fn get_mempool(State(state): State<AppState>) -> Json<Vec<ValidationRequestView>> {
    Json(state.backend.mempool_snapshot().await)
}

pub async fn get_access_list(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.backend.access_list().await)
}
