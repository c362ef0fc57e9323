use serde::{Deserialize, Serialize};

use super::Intent;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    pub intent: Intent,
    #[serde(default)]
    pub requested_fields: Vec<String>,
}

impl ChatResponse {
    pub fn new(reply: impl Into<String>, intent: Intent) -> Self {
        Self {
            reply: reply.into(),
            intent,
            requested_fields: Vec::new(),
        }
    }
}
