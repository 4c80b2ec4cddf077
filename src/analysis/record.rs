use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OPAQUE_ID: AtomicU64 = AtomicU64::new(1);

fn next_opaque_id() -> u64 {
    NEXT_OPAQUE_ID.fetch_add(1, Ordering::Relaxed)
}

/// The decoded result of one verse query.
///
/// The producer is a language model that does not enforce its own schema, so
/// every field is individually optional: a missing or `null` key decodes to
/// `None` rather than failing, and a record with nothing in it is still
/// valid. A present key of the wrong type fails the whole decode. Absence is
/// distinct from an empty string; the views pick a fallback for either.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub verse_reference: Option<String>,
    pub verse_text: Option<String>,
    pub context: Option<String>,
    pub exegesis: Option<String>,
    pub themes: Option<String>,
    pub cross_references: Option<Vec<CrossReference>>,
    #[serde(skip, default = "next_opaque_id")]
    fallback_id: u64,
}

/// One supporting citation inside an analysis. Two cross references with
/// identical content are still distinct entities; each instance carries its
/// own opaque id for list keying.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrossReference {
    pub reference: Option<String>,
    pub text: Option<String>,
    #[serde(skip, default = "next_opaque_id")]
    id: u64,
}

impl AnalysisRecord {
    pub fn new() -> Self {
        Self {
            verse_reference: None,
            verse_text: None,
            context: None,
            exegesis: None,
            themes: None,
            cross_references: None,
            fallback_id: next_opaque_id(),
        }
    }

    /// Stable identity for list diffing: the verse reference when the model
    /// supplied one, otherwise an opaque id minted at decode time. Not used
    /// for deduplication or caching.
    pub fn identity(&self) -> String {
        match &self.verse_reference {
            Some(reference) => reference.clone(),
            None => format!("analysis-{}", self.fallback_id),
        }
    }
}

impl Default for AnalysisRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossReference {
    pub fn new(reference: Option<String>, text: Option<String>) -> Self {
        Self {
            reference,
            text,
            id: next_opaque_id(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

// Identity fields are UI bookkeeping and never take part in comparison.
impl PartialEq for AnalysisRecord {
    fn eq(&self, other: &Self) -> bool {
        self.verse_reference == other.verse_reference
            && self.verse_text == other.verse_text
            && self.context == other.context
            && self.exegesis == other.exegesis
            && self.themes == other.themes
            && self.cross_references == other.cross_references
    }
}

impl PartialEq for CrossReference {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference && self.text == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_prefers_verse_reference() {
        let mut record = AnalysisRecord::new();
        record.verse_reference = Some("John 3:16".to_string());
        assert_eq!(record.identity(), "John 3:16");
    }

    #[test]
    fn identity_falls_back_to_opaque_id() {
        let a = AnalysisRecord::new();
        let b = AnalysisRecord::new();
        assert!(a.identity().starts_with("analysis-"));
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn cross_references_with_equal_content_have_distinct_ids() {
        let a = CrossReference::new(Some("Rom 5:8".into()), Some("But God...".into()));
        let b = CrossReference::new(Some("Rom 5:8".into()), Some("But God...".into()));
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }
}
