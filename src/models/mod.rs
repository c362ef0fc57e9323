pub mod chat;
pub mod intent;
pub mod lead;

pub use chat::{ChatRequest, ChatResponse};
pub use intent::Intent;
pub use lead::Lead;
