//! Runtime configuration, read once per lookup from the process environment.
//!
//! `main` seeds the environment from a `.env` file (desktop dev) or the
//! bundled config (mobile builds) before the UI launches; everything here is
//! a plain read with a fixed default. The credential never travels further
//! than the request's authorization header.

use std::env;

use crate::analysis::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

pub const CREDENTIAL_VAR: &str = "SELAH_API_KEY";
pub const ENDPOINT_VAR: &str = "SELAH_ENDPOINT";
pub const MODEL_VAR: &str = "SELAH_MODEL";

/// The API credential, if one is configured. Blank values count as missing.
pub fn credential() -> Option<String> {
    env::var(CREDENTIAL_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn endpoint() -> String {
    env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

pub fn model() -> String {
    env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}
