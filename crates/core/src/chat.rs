//! Per-message orchestration: classify, extract, filter, rank, render.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;
use crate::constraints::{self, SearchConstraints};
use crate::errors::RequestError;
use crate::filter;
use crate::intent::{self, IntentKind};
use crate::ranking::{self, FAREWELL_REPLY, GREETING_REPLY};

/// What a message asks for, with constraints when it is a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryIntent {
    Greeting,
    Farewell,
    Search(SearchConstraints),
}

impl QueryIntent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::Greeting => IntentKind::Greeting,
            Self::Farewell => IntentKind::Farewell,
            Self::Search(_) => IntentKind::Search,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub intent: QueryIntent,
    /// Records listed in the reply; `None` unless the message was a search.
    pub match_count: Option<usize>,
    pub text: String,
}

/// Incoming `/chat` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// Parses a raw body. A missing `message` is the empty message; a body
    /// that is not JSON or whose `message` is not a string is an error the
    /// caller is expected to recover from with [`ChatRequest::default`].
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|error| RequestError::MalformedRequest(format!("invalid JSON: {error}")))?;

        match value.get("message") {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::String(message)) => Ok(Self { message: message.clone() }),
            Some(_) => {
                Err(RequestError::MalformedRequest("`message` is not a string".to_owned()))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Answers chat messages against a shared, read-only catalog.
#[derive(Clone, Debug)]
pub struct ChatEngine {
    catalog: Arc<Catalog>,
}

impl ChatEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn interpret(&self, message: &str) -> QueryIntent {
        let normalized = intent::normalize(message);
        match intent::classify(&normalized) {
            IntentKind::Greeting => QueryIntent::Greeting,
            IntentKind::Farewell => QueryIntent::Farewell,
            IntentKind::Search => {
                QueryIntent::Search(constraints::extract(&normalized, self.catalog.known()))
            }
        }
    }

    pub fn respond(&self, message: &str) -> ChatReply {
        let intent = self.interpret(message);
        match &intent {
            QueryIntent::Greeting => {
                ChatReply { intent, match_count: None, text: GREETING_REPLY.to_owned() }
            }
            QueryIntent::Farewell => {
                ChatReply { intent, match_count: None, text: FAREWELL_REPLY.to_owned() }
            }
            QueryIntent::Search(constraints) => {
                let outcome = ranking::rank(filter::apply(&self.catalog, constraints));
                let text = ranking::render(&outcome);
                let match_count = Some(outcome.match_count());
                ChatReply { intent, match_count, text }
            }
        }
    }
}
