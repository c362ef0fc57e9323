use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed booking request. Never mutated once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub service: String,
    /// Naive UTC, stamped at construction.
    pub created_at: NaiveDateTime,
}

impl Lead {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            service: service.into(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
