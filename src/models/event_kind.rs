use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Domain source of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Order installation, always a single day
    Order,
    /// Demo shipment, possibly spanning several days
    Demo,
}

impl EventKind {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "order" | "o" => Some(Self::Order),
            "demo" | "d" => Some(Self::Demo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Order => "order",
            EventKind::Demo => "demo",
        }
    }

    pub fn default_title(&self, id: i64) -> String {
        match self {
            EventKind::Order => format!("Order #{id}"),
            EventKind::Demo => format!("Demo #{id}"),
        }
    }
}
