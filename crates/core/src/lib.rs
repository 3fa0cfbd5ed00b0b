pub mod catalog;
pub mod chat;
pub mod config;
pub mod constraints;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod intent;
pub mod ranking;

pub use catalog::{Catalog, KnownValues, ValueCategory};
pub use chat::{ChatEngine, ChatReply, ChatRequest, ChatResponse, QueryIntent};
pub use constraints::{Constraint, SearchConstraints};
pub use domain::laptop::CatalogRecord;
pub use errors::{DataLoadError, RequestError};
pub use filter::CandidateSet;
pub use intent::IntentKind;
pub use ranking::{
    SearchOutcome, FAREWELL_REPLY, GREETING_REPLY, LISTING_HEADER, MAX_RESULTS, NO_MATCHES_REPLY,
};
