//! Analysis module for Selah
//!
//! Everything between "the user typed a verse reference" and "we have a
//! typed analysis record (or a classified error)" lives here:
//!
//! - `request` - builds the fixed chat-completion request for a reference
//! - `client` - sends it to the hosted endpoint and unwraps the envelope
//! - `extract` - recovers a JSON object from the model's noisy reply text
//! - `record` - the decoded analysis record and its cross references
//!
//! The pipeline is stateless and makes exactly one attempt per query; a
//! failure at any stage surfaces as a single `AnalysisError` and retry is
//! always a fresh user-initiated query.

mod client;
mod extract;
mod record;
mod request;

pub use client::{
    AnalysisClient, AnalysisError, DEFAULT_ENDPOINT, issue_query_ticket, newest_query_ticket,
};
pub use extract::{extract, slice_json_object, strip_trailing_commas};
pub use record::{AnalysisRecord, CrossReference};
pub use request::{
    ChatRequest, DEFAULT_MODEL, MAX_TOKENS, TEMPERATURE, TOP_P, USER_PROMPT_PREFIX, build_request,
};
