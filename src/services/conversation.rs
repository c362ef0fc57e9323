use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::{booking, intent};
use crate::storage::LeadStore;

/// Answers one chat message. Each call stands alone; nothing is remembered between calls.
pub fn process_message(
    store: &dyn LeadStore,
    request: &ChatRequest,
) -> Result<ChatResponse, AppError> {
    let (intent, reply) = intent::resolve(&request.message);

    tracing::info!(intent = intent.as_str(), "resolved message intent");

    match reply {
        Some(reply) => Ok(ChatResponse::new(reply, intent)),
        None => booking::complete_booking(
            store,
            request.name.as_deref(),
            request.phone.as_deref(),
            request.service.as_deref(),
        ),
    }
}
