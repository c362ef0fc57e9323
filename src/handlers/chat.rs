use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::conversation;
use crate::state::AppState;

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let response = conversation::process_message(state.leads.as_ref(), &payload)?;
    Ok(Json(response))
}
