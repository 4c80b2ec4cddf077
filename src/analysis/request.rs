use crate::types::{ChatMessage, Role};
use serde::Serialize;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

// Fixed sampling policy for every analysis query.
pub const TEMPERATURE: f64 = 0.5;
pub const MAX_TOKENS: u32 = 2048;
pub const TOP_P: f64 = 1.0;

pub const USER_PROMPT_PREFIX: &str = "Generate the analysis for: ";

const SYSTEM_INSTRUCTIONS: &str = r#"You are a careful scripture-study assistant. When given a verse reference you produce a multi-section analysis of it.

Respond with a single JSON object and nothing else: no markdown fences, no commentary, no prose before or after the object.

The object must contain exactly these keys:
- "verse_reference": string, the canonical form of the reference
- "verse_text": string, the verse text itself
- "context": string, the historical and literary context of the passage
- "exegesis": string, a close reading of the verse
- "themes": string, the major theological themes
- "cross_references": array of objects, each with string keys "reference" and "text"

If you have nothing for a key, use an empty string (or an empty array for "cross_references") rather than omitting the key. Escape any double quote inside a string value with a backslash. Do not emit trailing commas."#;

/// Wire shape of one chat-completion request body. Mirrors the remote
/// OpenAI-compatible API; `stop` stays `None` so it serializes as `null`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub stop: Option<String>,
    pub stream: bool,
}

/// Build the request body for one verse query. Pure construction: no
/// validation of the reference (the composer disables submission of empty
/// input) and no side effects. The credential is not part of the body; the
/// client attaches it as a bearer header.
pub fn build_request(verse_reference: &str, model: &str) -> ChatRequest {
    ChatRequest {
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: SYSTEM_INSTRUCTIONS.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: format!("{USER_PROMPT_PREFIX}{verse_reference}"),
            },
        ],
        model: model.to_string(),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        top_p: TOP_P,
        stop: None,
        stream: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_is_prefix_plus_reference() {
        let request = build_request("John 3:16", DEFAULT_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(
            request.messages[1].content,
            "Generate the analysis for: John 3:16"
        );
    }

    #[test]
    fn stop_serializes_as_null() {
        let request = build_request("Psalm 23:1", DEFAULT_MODEL);
        let body = serde_json::to_value(&request).expect("serialize request");
        assert!(body["stop"].is_null());
        assert_eq!(body["stream"], serde_json::json!(false));
    }
}
