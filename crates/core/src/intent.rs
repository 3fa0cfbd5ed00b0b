//! Message intent classification.

use serde::{Deserialize, Serialize};

const GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

/// Matched anywhere in the message, so "ok thanks bye" is a farewell.
const FAREWELL_MARKERS: [&str; 7] = ["bye", "goodbye", "see you", "exit", "thanks", "txn", "thank"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Greeting,
    Farewell,
    Search,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Search => "search",
        }
    }
}

/// Trimmed, lower-cased form of a message. All matching runs on this.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Classifies an already normalized message.
pub fn classify(normalized: &str) -> IntentKind {
    if normalized.is_empty() || GREETINGS.contains(&normalized) {
        return IntentKind::Greeting;
    }

    if FAREWELL_MARKERS.iter().any(|marker| normalized.contains(marker)) {
        return IntentKind::Farewell;
    }

    IntentKind::Search
}
