//! Recover a typed analysis record from the model's raw reply text.
//!
//! Hosted chat models routinely wrap structured output in prose or markdown
//! fences despite instructions, and trailing commas are the most common
//! syntax slip in generated JSON. Extraction runs three stages in order,
//! each gating the next: boundary slice, trailing-comma repair, decode.

use super::client::AnalysisError;
use super::record::AnalysisRecord;

/// Run the full pipeline over one raw reply.
pub fn extract(raw: &str) -> Result<AnalysisRecord, AnalysisError> {
    let body = slice_json_object(raw)?;
    let repaired = strip_trailing_commas(body);
    serde_json::from_str(&repaired).map_err(|err| AnalysisError::Malformed(err.to_string()))
}

/// Slice from the first `{` through the last `}`, dropping any
/// surrounding prose or code fencing. Fails when no object is present.
/// A `}` belonging to trailing prose would extend the slice and fail the
/// decode instead; that rare case surfaces as a malformed-reply error.
pub fn slice_json_object(raw: &str) -> Result<&str, AnalysisError> {
    let start = raw
        .find('{')
        .ok_or_else(|| AnalysisError::Malformed("no opening brace in reply".to_string()))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| AnalysisError::Malformed("no closing brace in reply".to_string()))?;
    if end < start {
        return Err(AnalysisError::Malformed(
            "closing brace precedes opening brace".to_string(),
        ));
    }
    Ok(&raw[start..=end])
}

/// Drop every comma whose next non-whitespace character closes an
/// object or array. This is the only rewrite applied; anything else that is
/// syntactically wrong (unescaped quotes in particular) is left to fail the
/// decode. Idempotent.
pub fn strip_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (index, ch) in input.char_indices() {
        if ch == ',' {
            let rest = input[index + 1..].trim_start();
            if rest.starts_with('}') || rest.starts_with(']') {
                continue;
            }
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_between_outermost_braces() {
        let sliced = slice_json_object("blah blah { \"a\":1 } trailing junk").unwrap();
        assert_eq!(sliced, "{ \"a\":1 }");
    }

    #[test]
    fn rejects_reversed_braces() {
        assert!(slice_json_object("} nothing here {").is_err());
    }

    #[test]
    fn strips_commas_before_closers() {
        assert_eq!(strip_trailing_commas(r#"{"a":1,}"#), r#"{"a":1}"#);
        assert_eq!(
            strip_trailing_commas(r#"{"a":[1,2,],"b":3}"#),
            r#"{"a":[1,2],"b":3}"#
        );
    }

    #[test]
    fn repair_is_idempotent() {
        let once = strip_trailing_commas(r#"{"a":[1,2,  ] , }"#);
        let twice = strip_trailing_commas(&once);
        assert_eq!(once, twice);
    }
}
