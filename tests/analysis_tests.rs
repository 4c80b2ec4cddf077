//! Integration tests for the analysis pipeline
//!
//! Covers request construction, boundary extraction, trailing-comma repair,
//! schema-tolerant decoding and the end-to-end extraction scenarios.

use selah::analysis::{
    AnalysisClient, AnalysisError, AnalysisRecord, CrossReference, DEFAULT_MODEL, MAX_TOKENS,
    TEMPERATURE, TOP_P, build_request, extract, slice_json_object, strip_trailing_commas,
};
use selah::types::Role;

mod request_builder_tests {
    use super::*;

    #[test]
    fn test_user_message_for_any_reference() {
        for reference in ["John 3:16", "Psalm 23", "1 Cor 13:4-7", "Obadiah 1:1"] {
            let request = build_request(reference, DEFAULT_MODEL);
            assert_eq!(
                request.messages[1].content,
                format!("Generate the analysis for: {reference}")
            );
        }
    }

    #[test]
    fn test_fixed_model_parameters() {
        let request = build_request("John 3:16", DEFAULT_MODEL);
        assert_eq!(request.temperature, TEMPERATURE);
        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.max_tokens, MAX_TOKENS);
        assert_eq!(request.max_tokens, 2048);
        assert_eq!(request.top_p, TOP_P);
        assert_eq!(request.top_p, 1.0);
        assert_eq!(request.stop, None);
        assert!(!request.stream);
    }

    #[test]
    fn test_system_message_comes_first() {
        let request = build_request("John 3:16", DEFAULT_MODEL);
        assert_eq!(request.messages[0].role, Role::System);
        let instructions = &request.messages[0].content;
        assert!(instructions.contains("single JSON object"));
        assert!(instructions.contains("cross_references"));
        assert!(instructions.contains("trailing commas"));
    }

    #[test]
    fn test_wire_body_shape() {
        let request = build_request("John 3:16", "some-model");
        let body = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(body["model"], "some-model");
        assert_eq!(body["temperature"], serde_json::json!(0.5));
        assert_eq!(body["max_tokens"], serde_json::json!(2048));
        assert_eq!(body["top_p"], serde_json::json!(1.0));
        assert!(body["stop"].is_null());
        assert_eq!(body["stream"], serde_json::json!(false));
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
    }
}

mod boundary_tests {
    use super::*;

    #[test]
    fn test_slices_embedded_object() {
        let sliced = slice_json_object("blah blah { \"a\":1 } trailing junk").unwrap();
        assert_eq!(sliced, "{ \"a\":1 }");
    }

    #[test]
    fn test_missing_opening_brace_fails() {
        let err = slice_json_object("nothing structured here }").unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn test_missing_closing_brace_fails() {
        let err = slice_json_object("{ never closed").unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn test_plain_refusal_fails() {
        let err = slice_json_object("I cannot analyze this verse.").unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }
}

mod repair_tests {
    use super::*;

    #[test]
    fn test_removes_trailing_comma_in_object() {
        assert_eq!(strip_trailing_commas(r#"{"a":1,}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_removes_trailing_comma_in_array() {
        assert_eq!(
            strip_trailing_commas(r#"{"a":[1,2,],"b":3}"#),
            r#"{"a":[1,2],"b":3}"#
        );
    }

    #[test]
    fn test_leaves_valid_json_untouched() {
        let valid = r#"{"a":[1,2],"b":{"c":3}}"#;
        assert_eq!(strip_trailing_commas(valid), valid);
    }

    #[test]
    fn test_handles_whitespace_before_closer() {
        assert_eq!(
            strip_trailing_commas("{\"a\": [1, 2, \n ] , \n}"),
            "{\"a\": [1, 2 \n ]  \n}"
        );
    }

    // The scan is character-level, not string-aware: a comma inside a string
    // value loses out when whitespace and a closer follow it. Known cost of
    // the single rewrite rule.
    #[test]
    fn test_comma_inside_string_before_closer_is_dropped() {
        assert_eq!(
            strip_trailing_commas(r#"{"themes":"wait, }"}"#),
            r#"{"themes":"wait }"}"#
        );
    }

    #[test]
    fn test_repair_is_idempotent() {
        let input = r#"{"a":[1,2,  ], "b":"x",}"#;
        let once = strip_trailing_commas(input);
        let twice = strip_trailing_commas(&once);
        assert_eq!(once, twice);
    }
}

mod decode_tests {
    use super::*;

    #[test]
    fn test_omitted_cross_references_decode_as_absent() {
        let record = extract(r#"{"verse_reference":"John 3:16","themes":"love"}"#).unwrap();
        assert_eq!(record.verse_reference.as_deref(), Some("John 3:16"));
        assert_eq!(record.themes.as_deref(), Some("love"));
        assert!(record.cross_references.is_none());
        assert!(record.verse_text.is_none());
        assert!(record.context.is_none());
        assert!(record.exegesis.is_none());
    }

    #[test]
    fn test_null_fields_decode_as_absent() {
        let record = extract(r#"{"verse_reference":null,"context":null}"#).unwrap();
        assert!(record.verse_reference.is_none());
        assert!(record.context.is_none());
    }

    #[test]
    fn test_fully_empty_object_is_valid() {
        let record = extract("{}").unwrap();
        assert_eq!(record, AnalysisRecord::new());
    }

    #[test]
    fn test_empty_string_is_distinct_from_absent() {
        let record = extract(r#"{"context":""}"#).unwrap();
        assert_eq!(record.context.as_deref(), Some(""));
        assert!(record.exegesis.is_none());
    }

    #[test]
    fn test_type_mismatch_fails_whole_decode() {
        let err = extract(r#"{"verse_reference":"John 3:16","themes":42}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn test_mistyped_cross_reference_element_fails() {
        let err = extract(r#"{"cross_references":[{"reference":7}]}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mut record = AnalysisRecord::new();
        record.verse_reference = Some("John 3:16".into());
        record.verse_text = Some("For God so loved the world...".into());
        record.context = Some("Part of the conversation with Nicodemus.".into());
        record.exegesis = Some("The verse turns on the verb \"gave\".".into());
        record.themes = Some("Love, belief, eternal life.".into());
        record.cross_references = Some(vec![
            CrossReference::new(Some("Rom 5:8".into()), Some("But God shows his love...".into())),
            CrossReference::new(Some("1 John 4:9".into()), None),
        ]);

        let encoded = serde_json::to_string(&record).expect("serialize record");
        let decoded = extract(&encoded).expect("decode what we encoded");
        assert_eq!(decoded, record);
    }
}

mod end_to_end_tests {
    use super::*;

    #[test]
    fn test_fenced_reply_with_trailing_comma() {
        let raw = "Sure! ```json\n{\"verse_reference\":\"John 3:16\",\"verse_text\":\"For God so loved...\",\"context\":\"\",\"exegesis\":\"\",\"themes\":\"\",\"cross_references\":[{\"reference\":\"Rom 5:8\",\"text\":\"...\"}],}\n```";
        let record = extract(raw).unwrap();
        assert_eq!(record.verse_reference.as_deref(), Some("John 3:16"));
        assert_eq!(record.verse_text.as_deref(), Some("For God so loved..."));
        assert_eq!(record.context.as_deref(), Some(""));
        let refs = record.cross_references.expect("cross references present");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].reference.as_deref(), Some("Rom 5:8"));
    }

    #[test]
    fn test_refusal_without_braces_fails() {
        let err = extract("I cannot analyze this verse.").unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn test_prose_wrapped_object_decodes() {
        let raw = "Here is your analysis:\n\n{\"verse_reference\":\"Psalm 23:1\",\"themes\":\"provision\"}\n\nHope that helps!";
        // The trailing prose has no closing brace, so the slice ends at the object
        let record = extract(raw).unwrap();
        assert_eq!(record.verse_reference.as_deref(), Some("Psalm 23:1"));
        assert_eq!(record.themes.as_deref(), Some("provision"));
    }
}

mod client_tests {
    use super::*;

    #[test]
    fn test_blank_credential_is_missing() {
        let err = AnalysisClient::new("https://example.com/v1/chat", "model", "   ").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingCredential));
    }

    #[test]
    fn test_unparseable_endpoint_is_invalid() {
        let err = AnalysisClient::new("not a url", "model", "key").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_debug_output_redacts_credential() {
        let client =
            AnalysisClient::new("https://example.com/v1/chat", "model", "super-secret-key")
                .unwrap();
        let formatted = format!("{client:?}");
        assert!(!formatted.contains("super-secret-key"));
        assert!(formatted.contains("<redacted>"));
    }

    #[test]
    fn test_user_messages_are_stable() {
        assert!(
            AnalysisError::MissingCredential
                .user_message()
                .contains("SELAH_API_KEY")
        );
        let malformed = AnalysisError::Malformed("missing field".to_string());
        let message = malformed.user_message();
        assert!(message.contains("Complex punctuation"));
        assert!(message.contains("missing field"));
    }
}
