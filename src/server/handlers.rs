//! API handlers
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{
    timestamp_now, ContextRequest, ContextResponse, TranslationRequest, TranslationResponse,
};

use super::AppState;

/// Translate one chunk of texts
pub async fn translate_chunk(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslationResponse>, AppError> {
    let Json(body) = payload?;
    let request = TranslationRequest::from_json(body)?;
    let result = state.translator.process_translation(&request).await?;
    Ok(Json(result.into_response()))
}

/// Derive a translation context block from sample texts
pub async fn generate_context(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContextResponse>, AppError> {
    let Json(body) = payload?;
    let request = ContextRequest::from_json(body)?;
    let result = state
        .context_generator
        .generate_translation_context(&request)
        .await?;
    Ok(Json(result.into_response()))
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": timestamp_now(),
        })),
    )
}
