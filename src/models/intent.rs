use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Program,
    Locatie,
    Servicii,
    Preturi,
    Booking,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Program => "program",
            Intent::Locatie => "locatie",
            Intent::Servicii => "servicii",
            Intent::Preturi => "preturi",
            Intent::Booking => "booking",
            Intent::Fallback => "fallback",
        }
    }
}
